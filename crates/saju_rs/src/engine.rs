//! The chart engine: pillars, analysis and luck periods in one call.

use std::path::Path;
use std::sync::Arc;

use saju_base::{
    FourPillars, Gender, LuckPeriod, element_counts, four_pillars, luck_periods, relation_table,
    useful_elements,
};
use saju_time::{SolarTermProvider, SolarTermTable};
use tracing::debug;

use crate::birth::BirthData;
use crate::chart::BirthChart;
use crate::error::SajuError;

/// Engine configuration.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Solar-term table used for month boundaries.
    pub solar_terms: Arc<SolarTermTable>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            solar_terms: SolarTermTable::embedded_shared(),
        }
    }
}

impl EngineConfig {
    pub fn with_solar_terms(table: SolarTermTable) -> Self {
        Self {
            solar_terms: Arc::new(table),
        }
    }

    /// Use a JSON solar-term document instead of the embedded table.
    pub fn from_solar_terms_file(path: &Path) -> Result<Self, SajuError> {
        let table = SolarTermTable::load(path)?;
        debug!(
            path = %path.display(),
            default_year = table.default_year(),
            "loaded solar-term table"
        );
        Ok(Self::with_solar_terms(table))
    }
}

/// Immutable, stateless chart calculator; safe to share across threads.
#[derive(Debug, Clone)]
pub struct SajuEngine {
    solar_terms: Arc<SolarTermTable>,
}

impl Default for SajuEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl SajuEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            solar_terms: config.solar_terms,
        }
    }

    pub fn solar_terms(&self) -> &SolarTermTable {
        &self.solar_terms
    }

    /// Full birth chart.
    pub fn calculate(&self, birth: &BirthData) -> Result<BirthChart, SajuError> {
        let moment = birth.validate()?;
        if let Some(tz) = &birth.timezone {
            debug!(timezone = %tz, "timezone accepted but not applied");
        }
        let terms = self.solar_terms();
        let pillars = four_pillars(&moment, terms);
        let counts = element_counts(&pillars);
        let chart = BirthChart {
            pillars,
            element_counts: counts,
            ten_relations: relation_table(&pillars),
            useful_elements: useful_elements(&counts),
            luck_periods: luck_periods(&moment, birth.gender, terms)?,
            day_stem: pillars.day.stem,
            day_element: pillars.day.stem.element(),
            gender: birth.gender,
            solar_term_year: terms.resolved_year(moment.year()),
        };
        debug!(
            birth = %moment,
            day = %pillars.day,
            solar_term_year = chart.solar_term_year,
            "birth chart calculated"
        );
        Ok(chart)
    }

    /// Only the four pillars.
    pub fn pillars(&self, birth: &BirthData) -> Result<FourPillars, SajuError> {
        let moment = birth.validate()?;
        Ok(four_pillars(&moment, self.solar_terms()))
    }

    /// Luck periods from birth year and month alone.
    pub fn luck_periods(
        &self,
        year: i32,
        month: u32,
        gender: Gender,
    ) -> Result<Vec<LuckPeriod>, SajuError> {
        let moment = BirthData::new(year, month, 1, 0).validate()?;
        Ok(luck_periods(&moment, gender, self.solar_terms())?)
    }
}
