// SPDX-License-Identifier: AGPL-3.0-only
// Copyright Authors of dogceo

use console::Emoji;

pub(crate) static DOG: Emoji = Emoji("🐶", "");
pub(crate) static WARNING: Emoji = Emoji("⚠️", "");
pub(crate) static CHECK_MARK: Emoji = Emoji("✅", "");
pub(crate) static CROSS_MARK: Emoji = Emoji("❌", "");
