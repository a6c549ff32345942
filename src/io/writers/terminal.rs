use crate::aggregation::RankingReport;
use crate::core::PetRecord;
use crate::featured::FeaturedReport;
use crate::formatting::{formatter_for, score_bar, FormattingConfig, OutputFormatter};
use crate::insights::{InsightsReport, NameCount};
use crate::io::output::{format_optional_score, round1, OutputWriter};
use crate::lookup::PetProfile;
use std::io::Write;

const BAR_WIDTH: usize = 30;
const RULE: &str = "=======================================";

pub struct TerminalWriter<W: Write> {
    writer: W,
    formatter: Box<dyn OutputFormatter>,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self::with_formatting(writer, FormattingConfig::from_env())
    }

    pub fn with_formatting(writer: W, formatting: FormattingConfig) -> Self {
        Self {
            writer,
            formatter: formatter_for(formatting),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn title(&mut self, text: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", self.formatter.header(text))?;
        writeln!(self.writer, "{}", self.formatter.header(&RULE[..text.len().min(RULE.len())]))?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn name_counts(&mut self, heading: &str, rows: &[NameCount]) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", self.formatter.bold(heading))?;
        if rows.is_empty() {
            writeln!(self.writer, "  {}", self.formatter.dim("(none)"))?;
        }
        let width = rows.iter().map(|r| r.name.chars().count()).max().unwrap_or(0);
        for row in rows {
            writeln!(self.writer, "  {:<width$}  {:>4}", row.name, row.count)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn profile_body(&mut self, profile: &PetProfile) -> anyhow::Result<()> {
        let f = &self.formatter;
        let mut header = f.bold(&profile.name);
        if !profile.school.is_empty() {
            header.push_str(&format!("  [{}]", profile.school));
        }
        if let Some(pedigree) = profile.rounded_pedigree() {
            header.push_str(&format!("  pedigree {}", pedigree));
        }
        writeln!(self.writer, "{}", header)?;

        let composite = round1(profile.score.composite);
        writeln!(
            self.writer,
            "Composite score: {}",
            f.score(composite, &format!("{:.1}", composite))
        )?;

        let subs = &profile.score.sub_scores;
        for (label, value) in [
            ("Cards", subs.cards),
            ("Talents", subs.talents),
            ("Derby", subs.derby),
            ("Pedigree", subs.pedigree),
            ("Attributes", subs.attributes),
        ] {
            let text = format_optional_score(value);
            let shown = match value {
                Some(v) => f.score(v, &text),
                None => f.dim(&text),
            };
            writeln!(self.writer, "  {:<10} {:>5}", label, shown)?;
        }
        writeln!(self.writer)?;

        if !profile.spells.is_empty() {
            let names: Vec<&str> = profile.spells.iter().map(|s| s.name.as_str()).collect();
            writeln!(self.writer, "Spells:  {}", names.join(", "))?;
        }
        if !profile.talents.is_empty() {
            let talents: Vec<String> = profile
                .talents
                .iter()
                .map(|t| match t.rarity {
                    Some(rarity) => format!("{} ({})", t.name, rarity),
                    None => t.name.clone(),
                })
                .collect();
            writeln!(self.writer, "Talents: {}", talents.join(", "))?;
        }
        if !profile.derby.is_empty() {
            writeln!(self.writer, "Derby:   {}", profile.derby.join(", "))?;
        }

        let comparison = &profile.pedigree_comparison;
        match comparison.distribution {
            Some(dist) => {
                let percentile = comparison
                    .percentile
                    .map(|p| format!(", percentile {}", p))
                    .unwrap_or_default();
                writeln!(
                    self.writer,
                    "School pedigree: mean {:.1}, std {:.1} ({} pets{})",
                    dist.mean, dist.std, comparison.cohort_size, percentile
                )?;
                match comparison.band {
                    Some((low, high)) => writeln!(
                        self.writer,
                        "Typical range: {:.1} to {:.1}",
                        low, high
                    )?,
                    None => writeln!(
                        self.writer,
                        "{}",
                        f.dim("Not enough spread to plot")
                    )?,
                }
            }
            None => writeln!(self.writer, "{}", f.dim("No pedigree data for this school"))?,
        }
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_ranking(&mut self, report: &RankingReport) -> anyhow::Result<()> {
        self.title("School Ranking")?;
        let w = &report.weights;
        writeln!(
            self.writer,
            "{}",
            self.formatter.dim(&format!(
                "weights: cards {:.2} | talents {:.2} | derby {:.2} | pedigree {:.2} | attributes {:.2}",
                w.cards(),
                w.talents(),
                w.derby(),
                w.pedigree(),
                w.attributes()
            ))
        )?;
        writeln!(
            self.writer,
            "{} of {} pets ranked",
            report.ranked_pets, report.total_pets
        )?;
        writeln!(self.writer)?;

        if report.schools.is_empty() {
            writeln!(self.writer, "{}", self.formatter.dim("No school has any pets."))?;
            return Ok(self.writer.flush()?);
        }

        let width = report
            .schools
            .iter()
            .map(|s| s.school.chars().count())
            .max()
            .unwrap_or(0);
        for (i, row) in report.schools.iter().enumerate() {
            let mean = row.rounded_mean();
            writeln!(
                self.writer,
                "{:>2}. {:<width$}  {}  {}  ({} pets)",
                i + 1,
                row.school,
                self.formatter.score(mean, &format!("{:>5.1}", mean)),
                score_bar(mean, BAR_WIDTH),
                row.count
            )?;
        }
        self.writer.flush()?;
        Ok(())
    }

    fn write_profile(&mut self, profile: &PetProfile) -> anyhow::Result<()> {
        self.profile_body(profile)?;
        self.writer.flush()?;
        Ok(())
    }

    fn write_featured(&mut self, report: &FeaturedReport) -> anyhow::Result<()> {
        self.title(&format!("Featured Pet for {}", report.date))?;
        self.profile_body(&report.profile)?;
        self.writer.flush()?;
        Ok(())
    }

    fn write_search_results(&mut self, query: &str, hits: &[&PetRecord]) -> anyhow::Result<()> {
        if hits.is_empty() {
            writeln!(
                self.writer,
                "{}",
                self.formatter.dim(&format!("No pets match \"{}\"", query.trim()))
            )?;
            return Ok(self.writer.flush()?);
        }
        for (i, pet) in hits.iter().enumerate() {
            let pedigree = pet
                .pedigree
                .map(|p| format!("  pedigree {:.0}", p))
                .unwrap_or_default();
            let school = match pet.school_label() {
                "" => String::new(),
                s => format!("  [{}]", s),
            };
            writeln!(
                self.writer,
                "{:>2}. {}{}{}",
                i + 1,
                self.formatter.bold(pet.display_name()),
                school,
                self.formatter.dim(&pedigree)
            )?;
        }
        self.writer.flush()?;
        Ok(())
    }

    fn write_insights(&mut self, report: &InsightsReport) -> anyhow::Result<()> {
        self.title("Corpus Insights")?;
        writeln!(self.writer, "Total pets: {}", report.total_pets)?;
        writeln!(self.writer)?;
        self.name_counts("Most common cards", &report.top_cards)?;
        self.name_counts("Most common talents", &report.top_talents)?;

        writeln!(self.writer, "{}", self.formatter.bold("Average cards per school"))?;
        let width = report
            .average_cards_by_school
            .iter()
            .map(|r| r.school.chars().count())
            .max()
            .unwrap_or(0);
        for row in &report.average_cards_by_school {
            writeln!(
                self.writer,
                "  {:<width$}  {:>5.1}  ({} pets)",
                row.school,
                round1(row.average_cards),
                row.pets
            )?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::SchoolAggregate;
    use crate::rarity::RarityLookup;
    use crate::scoring::{CompositeScorer, ScoringWeights};

    fn plain_writer() -> TerminalWriter<Vec<u8>> {
        TerminalWriter::with_formatting(Vec::new(), FormattingConfig::plain())
    }

    #[test]
    fn ranking_lists_schools_in_order() {
        let report = RankingReport {
            weights: ScoringWeights::default().normalize(),
            total_pets: 3,
            ranked_pets: 3,
            schools: vec![
                SchoolAggregate {
                    school: "Myth".into(),
                    mean_score: 55.55,
                    count: 2,
                },
                SchoolAggregate {
                    school: "Fire".into(),
                    mean_score: 12.0,
                    count: 1,
                },
            ],
        };
        let mut writer = plain_writer();
        writer.write_ranking(&report).unwrap();
        let text = String::from_utf8(writer.into_inner()).unwrap();

        let myth = text.find(" 1. Myth").unwrap();
        let fire = text.find(" 2. Fire").unwrap();
        assert!(myth < fire);
        assert!(text.contains(" 55.6 "));
        assert!(text.contains("3 of 3 pets ranked"));
    }

    #[test]
    fn profile_shows_missing_sub_scores_as_dash() {
        let lookup = RarityLookup::default();
        let scorer = CompositeScorer::new(&lookup, &ScoringWeights::default());
        let pet = PetRecord {
            name: Some("Lonely Imp".into()),
            ..PetRecord::default()
        };
        let profile = PetProfile::build(
            &pet,
            std::slice::from_ref(&pet),
            &crate::lookup::DisplayCatalogs::default(),
            &scorer,
        );

        let mut writer = plain_writer();
        writer.write_profile(&profile).unwrap();
        let text = String::from_utf8(writer.into_inner()).unwrap();

        assert!(text.starts_with("Lonely Imp\n"));
        assert!(text.contains("  Talents        -"));
        assert!(text.contains("No pedigree data for this school"));
    }

    #[test]
    fn empty_search_reports_query() {
        let mut writer = plain_writer();
        writer.write_search_results("dragon", &[]).unwrap();
        let text = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(text, "No pets match \"dragon\"\n");
    }
}
