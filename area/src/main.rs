// Copyright 2026 the Area Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Opens the Area viewer window.

use area::AreaConfig;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    area::run(AreaConfig::default())
}
