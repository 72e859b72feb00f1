//! Module for visualizing generated candle series and liquidity profiles.

use crate::errors::{Error, Result};
use crate::liquidity::Bin;
use crate::market::Candle;

use plotters::backend::{BitMapBackend, DrawingBackend, SVGBackend};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::WHITE;

/// Aspect ratio for the generated charts.
const ASPECT_RATIO: f64 = 0.5625;
/// Size of the X-axis labels.
const X_LABEL_SIZE: i32 = 20;
/// Size of the Y-axis labels.
const Y_LABEL_SIZE: i32 = 20;
/// Width of one profile bucket on the multiplier axis.
const BIN_WIDTH: f64 = 0.1;

/// Output formats for the generated charts with output filename.
#[derive(Default)]
pub enum DrawOutput {
    /// Save to the output SVG file.
    Svg(&'static str),
    /// Save to the output PNG file.
    Png(&'static str),
    /// Save to the output HTML file (not implemented).
    Html(&'static str),
    /// Print to the current console (not implemented).
    #[default]
    Inner,
}

/// Configuration options for chart generation.
#[derive(Default)]
pub struct DrawOptions {
    /// Chart title.
    title: Option<String>,
    /// Output format and path.
    output: DrawOutput,
    /// Whether to show the liquidity profile panel.
    show_profile: bool,
}

impl DrawOptions {
    /// Sets the chart title.
    pub fn title(mut self, title: impl ToString) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// Sets the output format and path.
    pub fn draw_output(mut self, output: DrawOutput) -> Self {
        self.output = output;
        self
    }

    /// Enables or disables the liquidity profile panel.
    pub fn show_profile(mut self, show: bool) -> Self {
        self.show_profile = show;
        self
    }
}

/// Chart drawing utility for generated market data.
#[derive(Default)]
pub struct Draw<'d> {
    /// Candle series to render.
    series: &'d [Candle],
    /// Liquidity profile rendered below the candles, if any.
    profile: Option<&'d [Bin]>,
    /// Drawing options.
    options: DrawOptions,
}

impl<'d> Draw<'d> {
    /// Creates a new `Draw` instance with the given candle series.
    pub fn with_series(series: &'d [Candle]) -> Self {
        Self {
            series,
            profile: None,
            options: DrawOptions::default(),
        }
    }

    /// Attaches a liquidity profile to render below the candles.
    pub fn with_profile(mut self, profile: &'d [Bin]) -> Self {
        self.profile = Some(profile);
        self
    }

    /// Sets the drawing options.
    pub fn with_options(mut self, options: DrawOptions) -> Self {
        self.options = options;
        self
    }

    fn show_profile(&self) -> bool {
        self.options.show_profile && self.profile.is_some()
    }

    /// Generates and saves the chart based on the configured options.
    pub fn plot(&self) -> Result<()> {
        if self.series.is_empty() {
            return Err(Error::EmptySeries);
        }

        let title = self.options.title.as_deref().unwrap_or("SMD Chart");
        let mut height_factor = 1.0;
        if self.show_profile() {
            height_factor += 0.4;
        }

        let candle_count = self.series.len() as u32;
        let width = 1280.max(10 * candle_count);
        let height = ((width as f64 * ASPECT_RATIO * height_factor) as u32).min(900);

        match self.options.output {
            DrawOutput::Svg(path) => self.plot_svg(path, width, height, title),
            DrawOutput::Png(path) => self.plot_png(path, width, height, title),
            DrawOutput::Html(_) => Err(Error::Unsupported("html")),
            DrawOutput::Inner => Err(Error::Unsupported("console")),
        }
    }

    /// Saves the chart as an SVG file.
    fn plot_svg(&self, path: &str, width: u32, height: u32, title: &str) -> Result<()> {
        let root = SVGBackend::new(path, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(|e| Error::Plotters(e.to_string()))?;
        self.draw_chart(&root, title)
    }

    /// Saves the chart as a PNG file.
    fn plot_png(&self, path: &str, width: u32, height: u32, title: &str) -> Result<()> {
        let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(|e| Error::Plotters(e.to_string()))?;
        self.draw_chart(&root, title)
    }

    /// Draws the price panel and, when configured, the profile panel.
    fn draw_chart<DB: DrawingBackend>(&self, drawing_area: &DrawingArea<DB, Shift>, title: &str) -> Result<()> {
        let total_height = drawing_area.dim_in_pixel().1 as f64;
        let profile_height = if self.show_profile() { total_height * 0.3 } else { 0.0 };
        let price_height = total_height - profile_height;

        let (price_area, profile_area) = if self.show_profile() {
            drawing_area.split_vertically(price_height as u32)
        } else {
            (drawing_area.clone(), drawing_area.clone())
        };

        self.draw_price_chart(&price_area, title)?;
        if let Some(profile) = self.profile.filter(|_| self.options.show_profile) {
            self.draw_profile_chart(&profile_area, profile)?;
        }

        drawing_area.present().map_err(|e| Error::Plotters(e.to_string()))
    }

    /// Draws the price chart (candlesticks).
    fn draw_price_chart<DB: DrawingBackend>(&self, drawing_area: &DrawingArea<DB, Shift>, title: &str) -> Result<()> {
        let candles = self.series;
        let min_price = candles.iter().map(|c| c.low()).fold(f64::INFINITY, f64::min);
        let max_price = candles.iter().map(|c| c.high()).fold(f64::NEG_INFINITY, f64::max);
        let first_time = candles.first().ok_or(Error::EmptySeries)?.time();
        let last_time = candles.last().ok_or(Error::EmptySeries)?.time();
        let price_range = max_price - min_price;
        let price_padding = price_range * 0.1;

        let (top, bottom) = if self.show_profile() { (0, 0) } else { (10, 10) };
        let drawing_area = drawing_area.margin(top, bottom, 70, 70);
        let mut builder = ChartBuilder::on(&drawing_area);
        if !self.show_profile() {
            builder.x_label_area_size(X_LABEL_SIZE);
        }

        let mut chart = builder
            .caption(title, ("sans-serif", 30).into_font())
            .y_label_area_size(Y_LABEL_SIZE)
            .build_cartesian_2d(
                first_time..last_time,
                min_price - price_padding..max_price + price_padding,
            )
            .map_err(|e| Error::Plotters(e.to_string()))?;

        let candle_count = candles.len();
        let x_labels = candle_count / 15;

        {
            let mut mesh = chart.configure_mesh();
            mesh.y_desc("Price")
                .y_label_style(("sans-serif", Y_LABEL_SIZE))
                .y_labels(5);

            if self.show_profile() {
                mesh.disable_x_axis();
            } else {
                mesh.x_desc("Time")
                    .x_label_style(("sans-serif", X_LABEL_SIZE))
                    .x_labels(x_labels);
            }

            mesh.draw().map_err(|e| Error::Plotters(e.to_string()))?;
        }

        let candle_width = {
            let total_width = drawing_area.dim_in_pixel().0 as f64;
            let available_width = total_width - (X_LABEL_SIZE * 2) as f64;
            let candles_count = candles.len() as f64;
            (available_width / candles_count).max(5.0) as u32
        };

        chart
            .draw_series(candles.iter().map(|c| {
                let x = c.time();
                let open = c.open();
                let high = c.high();
                let low = c.low();
                let close = c.close();
                let color = if close >= open { GREEN.filled() } else { RED.filled() };
                CandleStick::new(x, open, high, low, close, color, color, candle_width)
            }))
            .map_err(|e| Error::Plotters(e.to_string()))?;

        Ok(())
    }

    /// Draws the liquidity profile chart (bars over the multiplier axis).
    fn draw_profile_chart<DB: DrawingBackend>(&self, drawing_area: &DrawingArea<DB, Shift>, profile: &[Bin]) -> Result<()> {
        let max_liquidity = profile.iter().map(|b| b.liquidity).fold(f64::NEG_INFINITY, f64::max);
        let liquidity_padding = max_liquidity * 0.1;
        let span = profile.len() as f64 * BIN_WIDTH;
        let drawing_area = drawing_area.margin(0, 10, 70, 70);

        let mut chart = ChartBuilder::on(&drawing_area)
            .x_label_area_size(X_LABEL_SIZE)
            .y_label_area_size(Y_LABEL_SIZE)
            .build_cartesian_2d(0.0..span, 0.0..max_liquidity + liquidity_padding)
            .map_err(|e| Error::Plotters(e.to_string()))?;

        chart
            .configure_mesh()
            .x_desc("Price multiplier")
            .y_desc("Liquidity")
            .x_label_style(("sans-serif", X_LABEL_SIZE))
            .y_label_style(("sans-serif", Y_LABEL_SIZE))
            .x_labels(10)
            .y_labels(3)
            .draw()
            .map_err(|e| Error::Plotters(e.to_string()))?;

        chart
            .draw_series(profile.iter().map(|b| {
                let x = b.price_multiplier;
                Rectangle::new([(x, 0.0), (x + BIN_WIDTH, b.liquidity)], BLUE.mix(0.3).filled())
            }))
            .map(|_| ())
            .map_err(|e| Error::Plotters(e.to_string()))
    }
}
