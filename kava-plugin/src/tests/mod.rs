// Copyright (c) 2022 Kava Plugin Contributors

mod scenarios;
mod tools;
