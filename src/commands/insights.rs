use super::GlobalOptions;
use crate::cli::OutputArgs;
use crate::insights::InsightsReport;
use anyhow::Result;

pub fn handle_insights(globals: &GlobalOptions, output: &OutputArgs) -> Result<()> {
    let config = globals.load_config()?;
    let dataset = globals.load_dataset(&config)?;
    let display = config.display();

    let report = InsightsReport::build(&dataset.pets, display.top_cards, display.top_talents);

    let mut writer = globals.writer(output)?;
    writer.write_insights(&report)
}
