use super::GlobalOptions;
use crate::cli::OutputArgs;
use crate::featured::FeaturedReport;
use crate::lookup::DisplayCatalogs;
use crate::rarity::RarityLookup;
use crate::scoring::CompositeScorer;
use anyhow::Result;
use chrono::{NaiveDate, Utc};

pub fn handle_featured(
    globals: &GlobalOptions,
    date: Option<NaiveDate>,
    output: &OutputArgs,
) -> Result<()> {
    let config = globals.load_config()?;
    let dataset = globals.load_dataset(&config)?;
    let date = date.unwrap_or_else(|| Utc::now().date_naive());

    let lookup = RarityLookup::from_catalog(&dataset.abilities);
    let scorer = CompositeScorer::new(&lookup, &config.weights());
    let catalogs = DisplayCatalogs::from_dataset(&dataset);

    let Some(report) = FeaturedReport::build(&dataset.pets, date, &catalogs, &scorer) else {
        anyhow::bail!("The pet corpus is empty; nothing to feature");
    };

    let mut writer = globals.writer(output)?;
    writer.write_featured(&report)
}
