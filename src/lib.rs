// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod app;
pub mod backup;
pub mod budget;
pub mod charts;
pub mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod error;
pub mod export;
pub mod goals;
pub mod ledger;
pub mod models;
pub mod predict;
pub mod progress;
pub mod registry;
pub mod store;
pub mod summary;
pub mod utils;
