use std::io::{self, Write};

use weather_core::{DisplaySurface, WeatherFields};

/// Display surface backed by a text stream.
///
/// `render` only updates panel state; `present` writes the visible panel.
#[derive(Debug)]
pub struct TerminalSurface<W: Write> {
    out: W,
    weather_visible: bool,
    not_found_visible: bool,
    not_found_message: String,
    fields: Option<WeatherFields>,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            weather_visible: false,
            not_found_visible: false,
            not_found_message: String::new(),
            fields: None,
        }
    }

    pub fn present(&mut self) -> io::Result<()> {
        if let (true, Some(fields)) = (self.weather_visible, &self.fields) {
            write_fields(&mut self.out, fields)?;
        }

        if self.not_found_visible {
            writeln!(self.out, "{}", self.not_found_message)?;
        }

        self.out.flush()
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

fn write_fields(out: &mut impl Write, fields: &WeatherFields) -> io::Result<()> {
    writeln!(out, "{}  {}°C  {}", fields.icon.glyph(), fields.temperature, fields.description)?;

    match (&fields.location, &fields.observed) {
        (Some(location), Some(observed)) => writeln!(out, "   {location}, observed {observed}")?,
        (Some(location), None) => writeln!(out, "   {location}")?,
        (None, Some(observed)) => writeln!(out, "   observed {observed}")?,
        (None, None) => {}
    }

    writeln!(out, "   Humidity {}   Wind {}", fields.humidity, fields.wind_speed)
}

impl<W: Write> DisplaySurface for TerminalSurface<W> {
    fn set_weather_visible(&mut self, visible: bool) {
        self.weather_visible = visible;
    }

    fn set_not_found_visible(&mut self, visible: bool) {
        self.not_found_visible = visible;
    }

    fn set_not_found_message(&mut self, message: &str) {
        self.not_found_message = message.to_string();
    }

    fn show_fields(&mut self, fields: &WeatherFields) {
        self.fields = Some(fields.clone());
    }
}
