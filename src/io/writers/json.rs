use crate::aggregation::RankingReport;
use crate::core::PetRecord;
use crate::featured::FeaturedReport;
use crate::insights::InsightsReport;
use crate::io::output::OutputWriter;
use crate::lookup::PetProfile;
use serde::Serialize;
use std::io::Write;

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_value<T: Serialize + ?Sized>(&mut self, value: &T) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[derive(Serialize)]
struct SearchResults<'a> {
    query: &'a str,
    results: &'a [&'a PetRecord],
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_ranking(&mut self, report: &RankingReport) -> anyhow::Result<()> {
        self.write_value(report)
    }

    fn write_profile(&mut self, profile: &PetProfile) -> anyhow::Result<()> {
        self.write_value(profile)
    }

    fn write_featured(&mut self, report: &FeaturedReport) -> anyhow::Result<()> {
        self.write_value(report)
    }

    fn write_search_results(&mut self, query: &str, hits: &[&PetRecord]) -> anyhow::Result<()> {
        self.write_value(&SearchResults {
            query,
            results: hits,
        })
    }

    fn write_insights(&mut self, report: &InsightsReport) -> anyhow::Result<()> {
        self.write_value(report)
    }
}
