// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tom F.

//! Common utilities shared by the measurement driver and the renderers.

pub mod timing;
