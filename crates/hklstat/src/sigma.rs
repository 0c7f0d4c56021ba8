use crate::Error;
use hklstat_nostd_internal::MergeStats;
use std::str::FromStr;

/// How [`crate::MergeEquivalents`] estimates the standard error of a merged
/// reflection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SigmaMethod {
    /// `sqrt(m2 / weight) / sqrt(redundancy)`, estimated from the spread of
    /// the observations
    #[default]
    Population,
    /// `sqrt(1 / weight)`, propagated from the per-observation sigmas
    Experimental,
}

impl SigmaMethod {
    const ALL: [SigmaMethod; 2] = [SigmaMethod::Population, SigmaMethod::Experimental];

    /// The name that is recognized when parsing
    pub fn name(&self) -> &'static str {
        match self {
            SigmaMethod::Population => "population sigma",
            SigmaMethod::Experimental => "experimental sigma",
        }
    }

    pub fn standard_error(&self, stats: &MergeStats) -> f64 {
        match self {
            SigmaMethod::Population => {
                (stats.m2() / stats.weight()).sqrt() / (stats.redundancy() as f64).sqrt()
            }
            SigmaMethod::Experimental => (1.0 / stats.weight()).sqrt(),
        }
    }
}

impl FromStr for SigmaMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SigmaMethod::ALL
            .into_iter()
            .find(|method| method.name() == s)
            .ok_or_else(|| {
                let choices = SigmaMethod::ALL.map(|m| m.name().to_owned()).to_vec();
                Error::sigma_method(s.to_owned(), choices)
            })
    }
}

impl core::fmt::Display for SigmaMethod {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
