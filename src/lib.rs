// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod budget;
pub mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod filter;
pub mod ids;
pub mod models;
pub mod storage;
pub mod store;
pub mod summary;
pub mod tracker;
pub mod utils;
