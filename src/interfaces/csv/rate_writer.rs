use crate::domain::rate::RateQuote;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct RateRecord<'a> {
    id: String,
    cost: String,
    label: &'a str,
}

/// Writes evaluated quotes as `id,cost,label` CSV rows.
pub struct RateWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> RateWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    /// Writes one row per quote. `render` supplies the label to print,
    /// so callers can emit the full checkout label instead of the raw one.
    pub fn write_rates<'a, I, F>(&mut self, rates: I, render: F) -> Result<()>
    where
        I: IntoIterator<Item = &'a RateQuote>,
        F: Fn(&RateQuote) -> String,
    {
        for quote in rates {
            let label = render(quote);
            self.writer.serialize(RateRecord {
                id: quote.id.to_string(),
                cost: quote.cost.to_string(),
                label: &label,
            })?;
        }
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> Result<W> {
        Ok(self.writer.into_inner().map_err(|e| e.into_error())?)
    }
}
