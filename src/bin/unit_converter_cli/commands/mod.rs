// ABOUTME: Re-exports command modules for unit-converter-cli
// ABOUTME: Provides catalog listing and conversion commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod catalog;
pub mod convert;
