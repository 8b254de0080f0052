// SPDX-License-Identifier: AGPL-3.0-only
// Copyright Authors of dogceo

use crate::cli::{args, commands, emoji, pluralize};
use color_eyre::eyre;
use console::style;
use dogceo_common::Images;
use std::collections::BTreeSet;
use std::process::ExitCode;

pub(crate) async fn main(args: args::Decode) -> eyre::Result<ExitCode> {
    commands::run::<Images, _>(args, render).await
}

fn render(images: &Images) -> String {
    let urls: Vec<&str> = images.iter().map(String::as_str).collect();

    let breeds: BTreeSet<&str> = urls.iter().filter_map(|url| Images::breed_of(url)).collect();
    let count = pluralize(images.len(), "image");
    let summary = match breeds.len() {
        0 => count,
        1 => format!(
            "{count} of {}",
            breeds.iter().next().copied().unwrap_or_default()
        ),
        n => format!("{count} across {}", pluralize(n, "breed")),
    };

    let mut out = urls.join("\n");
    if !out.is_empty() {
        out.push('\n');
    }
    out.push_str(&format!(
        "\n  {} {}\n",
        emoji::CHECK_MARK,
        style(summary).green().bold()
    ));
    out
}
