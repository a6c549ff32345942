use crate::aggregation::RankingReport;
use crate::core::PetRecord;
use crate::featured::FeaturedReport;
use crate::insights::InsightsReport;
use crate::io::output::{format_optional_score, round1, OutputWriter};
use crate::lookup::PetProfile;
use crate::scoring::NormalizedWeights;
use std::io::Write;

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_ranking(&mut self, report: &RankingReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# School Ranking")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "{} of {} pets ranked across {} schools.",
            report.ranked_pets,
            report.total_pets,
            report.schools.len()
        )?;
        writeln!(self.writer)?;
        self.write_weights(&report.weights)?;

        if report.schools.is_empty() {
            writeln!(self.writer, "_No school has any pets._")?;
            return Ok(self.writer.flush()?);
        }

        writeln!(self.writer, "| Rank | School | Mean Score | Pets |")?;
        writeln!(self.writer, "|------|--------|------------|------|")?;
        for (i, row) in report.schools.iter().enumerate() {
            writeln!(
                self.writer,
                "| {} | {} | {:.1} | {} |",
                i + 1,
                row.school,
                row.rounded_mean(),
                row.count
            )?;
        }
        self.writer.flush()?;
        Ok(())
    }

    fn write_profile(&mut self, profile: &PetProfile) -> anyhow::Result<()> {
        self.write_profile_body(profile, "#")?;
        self.writer.flush()?;
        Ok(())
    }

    fn write_featured(&mut self, report: &FeaturedReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Featured Pet for {}", report.date)?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Pick {} of {}.",
            report.index + 1,
            report.pool_size
        )?;
        writeln!(self.writer)?;
        self.write_profile_body(&report.profile, "##")?;
        self.writer.flush()?;
        Ok(())
    }

    fn write_search_results(&mut self, query: &str, hits: &[&PetRecord]) -> anyhow::Result<()> {
        writeln!(self.writer, "# Search: `{}`", query.trim())?;
        writeln!(self.writer)?;
        if hits.is_empty() {
            writeln!(self.writer, "_No pets match._")?;
            return Ok(self.writer.flush()?);
        }
        writeln!(self.writer, "| # | Name | School | Pedigree |")?;
        writeln!(self.writer, "|---|------|--------|----------|")?;
        for (i, pet) in hits.iter().enumerate() {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} |",
                i + 1,
                pet.display_name(),
                pet.school_label(),
                pet.pedigree
                    .map(|p| format!("{:.0}", p))
                    .unwrap_or_else(|| "-".into())
            )?;
        }
        self.writer.flush()?;
        Ok(())
    }

    fn write_insights(&mut self, report: &InsightsReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Corpus Insights")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "Total pets: {}", report.total_pets)?;
        writeln!(self.writer)?;

        writeln!(self.writer, "## Most Common Cards")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Card | Pets |")?;
        writeln!(self.writer, "|------|------|")?;
        for row in &report.top_cards {
            writeln!(self.writer, "| {} | {} |", row.name, row.count)?;
        }
        writeln!(self.writer)?;

        writeln!(self.writer, "## Most Common Talents")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Talent | Pets |")?;
        writeln!(self.writer, "|--------|------|")?;
        for row in &report.top_talents {
            writeln!(self.writer, "| {} | {} |", row.name, row.count)?;
        }
        writeln!(self.writer)?;

        writeln!(self.writer, "## Average Cards per School")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| School | Average Cards | Pets |")?;
        writeln!(self.writer, "|--------|---------------|------|")?;
        for row in &report.average_cards_by_school {
            writeln!(
                self.writer,
                "| {} | {:.1} | {} |",
                row.school,
                round1(row.average_cards),
                row.pets
            )?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_weights(&mut self, weights: &NormalizedWeights) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "Weights: cards {:.2}, talents {:.2}, derby {:.2}, pedigree {:.2}, attributes {:.2}",
            weights.cards(),
            weights.talents(),
            weights.derby(),
            weights.pedigree(),
            weights.attributes()
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_profile_body(&mut self, profile: &PetProfile, level: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "{} {}", level, profile.name)?;
        writeln!(self.writer)?;
        if !profile.school.is_empty() {
            writeln!(self.writer, "- School: {}", profile.school)?;
        }
        if let Some(pedigree) = profile.rounded_pedigree() {
            writeln!(self.writer, "- Pedigree: {}", pedigree)?;
        }
        if let Some(icon) = &profile.icon {
            writeln!(self.writer, "- Icon: <{}>", icon)?;
        }
        writeln!(
            self.writer,
            "- Composite score: {:.1}",
            round1(profile.score.composite)
        )?;
        writeln!(self.writer)?;

        let subs = &profile.score.sub_scores;
        writeln!(self.writer, "| Cards | Talents | Derby | Pedigree | Attributes |")?;
        writeln!(self.writer, "|-------|---------|-------|----------|------------|")?;
        writeln!(
            self.writer,
            "| {} | {} | {} | {} | {} |",
            format_optional_score(subs.cards),
            format_optional_score(subs.talents),
            format_optional_score(subs.derby),
            format_optional_score(subs.pedigree),
            format_optional_score(subs.attributes)
        )?;
        writeln!(self.writer)?;

        let sub = format!("{level}#");
        if !profile.spells.is_empty() {
            writeln!(self.writer, "{} Spells", sub)?;
            writeln!(self.writer)?;
            for spell in &profile.spells {
                match &spell.icon {
                    Some(icon) => writeln!(self.writer, "- {} (<{}>)", spell.name, icon)?,
                    None => writeln!(self.writer, "- {}", spell.name)?,
                }
            }
            writeln!(self.writer)?;
        }

        if !profile.talents.is_empty() {
            writeln!(self.writer, "{} Talents", sub)?;
            writeln!(self.writer)?;
            for talent in &profile.talents {
                match talent.rarity {
                    Some(rarity) => writeln!(self.writer, "- {} ({})", talent.name, rarity)?,
                    None => writeln!(self.writer, "- {}", talent.name)?,
                }
            }
            writeln!(self.writer)?;
        }

        if !profile.derby.is_empty() {
            writeln!(self.writer, "{} Derby", sub)?;
            writeln!(self.writer)?;
            for name in &profile.derby {
                writeln!(self.writer, "- {}", name)?;
            }
            writeln!(self.writer)?;
        }

        writeln!(self.writer, "{} Pedigree vs School", sub)?;
        writeln!(self.writer)?;
        let comparison = &profile.pedigree_comparison;
        match (comparison.distribution, comparison.percentile) {
            (Some(dist), percentile) => {
                writeln!(
                    self.writer,
                    "- School mean {:.1}, std {:.1} over {} pets",
                    dist.mean, dist.std, comparison.cohort_size
                )?;
                if let Some(p) = percentile {
                    writeln!(self.writer, "- Percentile: {}", p)?;
                }
                match comparison.band {
                    Some((low, high)) => {
                        writeln!(self.writer, "- Typical range: {:.1} to {:.1}", low, high)?
                    }
                    None => writeln!(self.writer, "- Not enough spread to plot")?,
                }
            }
            (None, _) => writeln!(self.writer, "- No pedigree data for this school")?,
        }
        Ok(())
    }
}
