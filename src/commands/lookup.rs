use super::GlobalOptions;
use crate::cli::OutputArgs;
use crate::lookup::{search_pets, DisplayCatalogs, PetProfile};
use crate::rarity::RarityLookup;
use crate::scoring::CompositeScorer;
use anyhow::Result;

pub fn handle_lookup(
    globals: &GlobalOptions,
    query: &str,
    limit: Option<usize>,
    select: Option<usize>,
    output: &OutputArgs,
) -> Result<()> {
    let config = globals.load_config()?;
    let dataset = globals.load_dataset(&config)?;
    let limit = limit.unwrap_or(config.display().search_limit);
    let hits = search_pets(&dataset.pets, query, limit);
    log::info!("{} pets match {:?}", hits.len(), query.trim());

    let Some(position) = select else {
        let mut writer = globals.writer(output)?;
        return writer.write_search_results(query, &hits);
    };

    let Some(pet) = position.checked_sub(1).and_then(|i| hits.get(i)) else {
        anyhow::bail!(
            "--select {} is out of range: {} pets match {:?}",
            position,
            hits.len(),
            query.trim()
        );
    };

    let lookup = RarityLookup::from_catalog(&dataset.abilities);
    let scorer = CompositeScorer::new(&lookup, &config.weights());
    let catalogs = DisplayCatalogs::from_dataset(&dataset);
    let profile = PetProfile::build(pet, &dataset.pets, &catalogs, &scorer);

    let mut writer = globals.writer(output)?;
    writer.write_profile(&profile)
}
