use ratatui::style::Color;

/// Dark dashboard palette
pub const BG: Color = Color::Rgb(18, 22, 30);
pub const FG: Color = Color::Rgb(200, 200, 210);
pub const DIM: Color = Color::Rgb(80, 80, 90);
pub const ACCENT: Color = Color::Rgb(0, 200, 150); // Teal/green
pub const HEADER_BG: Color = Color::Rgb(30, 36, 48);

pub const CURVE: Color = Color::Rgb(100, 160, 255); // Plotted function line
pub const HUMIDITY_BLUE: Color = Color::Rgb(52, 152, 219);
pub const LINK_OK: Color = Color::Rgb(50, 220, 100);
pub const LINK_DOWN: Color = Color::Rgb(220, 50, 50);
pub const LED_ON: Color = Color::Rgb(39, 174, 96);
pub const LED_OFF: Color = Color::Rgb(127, 140, 141);

/// Temperature bands used to color the live trace and the readout
pub const TEMP_HOT: Color = Color::Rgb(231, 76, 60); // above 30
pub const TEMP_WARM: Color = Color::Rgb(243, 156, 18); // 25 to 30
pub const TEMP_COOL: Color = Color::Rgb(39, 174, 96); // below 25

pub fn temperature_color(celsius: f64) -> Color {
    if celsius > 30.0 {
        TEMP_HOT
    } else if celsius >= 25.0 {
        TEMP_WARM
    } else {
        TEMP_COOL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temperature_bands_match_thresholds() {
        assert_eq!(temperature_color(31.0), TEMP_HOT);
        assert_eq!(temperature_color(30.0), TEMP_WARM);
        assert_eq!(temperature_color(25.0), TEMP_WARM);
        assert_eq!(temperature_color(24.9), TEMP_COOL);
    }
}
