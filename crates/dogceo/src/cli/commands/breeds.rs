// SPDX-License-Identifier: AGPL-3.0-only
// Copyright Authors of dogceo

use crate::cli::{args, commands, emoji, pluralize};
use color_eyre::eyre;
use console::style;
use dogceo_common::BreedsList;
use std::process::ExitCode;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct BreedRow<'a> {
    #[tabled(rename = "Breed")]
    breed: &'a str,
    #[tabled(rename = "Sub-breeds")]
    sub_breeds: String,
}

pub(crate) async fn main(args: args::Decode) -> eyre::Result<ExitCode> {
    commands::run::<BreedsList, _>(args, render).await
}

fn render(list: &BreedsList) -> String {
    let rows: Vec<BreedRow> = list
        .breeds()
        .into_iter()
        .map(|breed| BreedRow {
            breed,
            sub_breeds: list
                .sub_breeds(breed)
                .map(|subs| subs.join(", "))
                .unwrap_or_default(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());

    format!(
        "{table}\n\n  {} {}\n",
        emoji::DOG,
        style(format!(
            "{}, {}",
            pluralize(list.breed_count(), "breed"),
            pluralize(list.sub_breed_count(), "sub-breed")
        ))
        .green()
        .bold()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_render_one_row_per_breed() {
        let list: BreedsList =
            serde_json::from_str(r#"{"pug":[],"hound":["afghan","basset"]}"#).unwrap();

        let out = render(&list);
        assert!(out.contains("Breed"));
        assert!(out.contains("Sub-breeds"));
        assert!(out.contains("afghan, basset"));
        assert!(out.contains("2 breeds, 2 sub-breeds"));

        // Rows are sorted by breed name
        let hound = out.find("hound").unwrap();
        let pug = out.find("pug").unwrap();
        assert!(hound < pug);
    }

    #[test]
    fn should_use_singular_counts() {
        let list: BreedsList = serde_json::from_str(r#"{"hound":["afghan"]}"#).unwrap();

        let out = render(&list);
        assert!(out.contains("1 breed, 1 sub-breed"));
        assert!(!out.contains("1 breeds"));
        assert!(!out.contains("1 sub-breeds"));
    }
}
