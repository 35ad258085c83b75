// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::ST;

/// Value of the environment variable `name`. Empty when it is unset or not valid
/// unicode.
#[must_use]
pub fn get_env(name: &str) -> String { std::env::var(name).unwrap_or_default() }

/// Value of the environment variable `name` parsed as a base-10 integer, or `default`
/// when it is unset or doesn't parse. Same rule as [`StrType::int`](crate::StrType::int).
#[must_use]
pub fn get_env_int(name: &str, default: isize) -> isize { ST.int(&get_env(name), default) }
