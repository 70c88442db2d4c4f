use alloc::vec::Vec;

use crate::config::{Config, ConfigError};
use crate::decompose::decompose;
use crate::parser::{self, Format, ParseError, ParsedInput};
use crate::project::project;
use crate::sample::{AxisSeries, Sample, samples_to_axes};
use crate::smooth::smooth;

/// Runs the parse, decompose, project and smooth stages with a fixed [`Config`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Processor {
    config: Config,
}

impl Default for Processor {
    fn default() -> Self {
        Self {
            config: Config::default(),
        }
    }
}

impl Processor {
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Process one complete input string.
    ///
    /// Any malformed input fails the whole run; nothing is returned for the
    /// records that did parse.
    pub fn process(&self, input: &str) -> Result<Processed, ParseError> {
        let parsed = parser::parse(input)?;
        let format = parsed.format();

        let samples = match parsed {
            ParsedInput::Combined(totals) => decompose(&totals, &self.config.gravity),
            ParsedInput::Separated(samples) => samples,
        };

        let dot_product = project(&samples);
        let filtered = smooth(&dot_product, &self.config.smoothing);

        log::debug!(
            "processed {} samples ({:?}), {} filtered values",
            samples.len(),
            format,
            filtered.len()
        );

        Ok(Processed {
            format,
            samples,
            dot_product,
            filtered,
        })
    }
}

/// Process `input` with the default 100 Hz coefficient sets.
pub fn process(input: &str) -> Result<Processed, ParseError> {
    Processor::default().process(input)
}

/// Every intermediate result of one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Processed {
    format: Format,
    samples: Vec<Sample>,
    dot_product: Vec<f64>,
    filtered: Vec<f64>,
}

impl Processed {
    pub fn format(&self) -> Format {
        self.format
    }

    /// User and gravity acceleration per record.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// User acceleration projected onto gravity, one value per sample.
    pub fn dot_product(&self) -> &[f64] {
        &self.dot_product
    }

    /// Smoothed projection, ready for step detection.
    pub fn filtered(&self) -> &[f64] {
        &self.filtered
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn user_axes(&self) -> AxisSeries {
        samples_to_axes(&self.samples).0
    }

    pub fn gravity_axes(&self) -> AxisSeries {
        samples_to_axes(&self.samples).1
    }
}
