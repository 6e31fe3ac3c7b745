//! RGB channel mixer backing the color sliders.

use super::events::Channel;
use crate::draw::Color;

/// Three independent channel values in the 0.0 - 1.0 range.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ColorMixer {
    red: f64,
    green: f64,
    blue: f64,
}

impl ColorMixer {
    /// Creates a mixer with all channels at zero (black).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mixer from `[red, green, blue]` channel values.
    pub fn from_channels(channels: [f64; 3]) -> Self {
        let mut mixer = Self::new();
        mixer.set_channel(Channel::Red, channels[0]);
        mixer.set_channel(Channel::Green, channels[1]);
        mixer.set_channel(Channel::Blue, channels[2]);
        mixer
    }

    /// Sets one channel.
    ///
    /// Values outside 0.0 - 1.0 are clamped and NaN is treated as 0.0.
    pub fn set_channel(&mut self, channel: Channel, value: f64) {
        let clamped = if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, 1.0)
        };
        if clamped != value {
            log::warn!(
                "Channel {:?} value {} outside 0.0-1.0, using {}",
                channel,
                value,
                clamped
            );
        }

        match channel {
            Channel::Red => self.red = clamped,
            Channel::Green => self.green = clamped,
            Channel::Blue => self.blue = clamped,
        }
    }

    pub fn channel(&self, channel: Channel) -> f64 {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }

    /// The composite color of the three current channel values.
    pub fn current_color(&self) -> Color {
        Color::from_channels(self.red, self.green, self.blue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, RED};

    #[test]
    fn new_mixer_is_black() {
        assert_eq!(ColorMixer::new().current_color(), BLACK);
    }

    #[test]
    fn channels_are_independent() {
        let mut mixer = ColorMixer::new();
        mixer.set_channel(Channel::Green, 0.5);
        mixer.set_channel(Channel::Blue, 1.0);

        assert_eq!(mixer.channel(Channel::Red), 0.0);
        assert_eq!(mixer.channel(Channel::Green), 0.5);
        assert_eq!(mixer.current_color(), Color::new(0, 128, 255));
    }

    #[test]
    fn current_color_is_pure() {
        let mixer = ColorMixer::from_channels([0.3, 0.6, 0.9]);
        let first = mixer.current_color();
        let second = mixer.current_color();
        assert_eq!(first, second);
    }

    #[test]
    fn current_color_follows_latest_channel_change() {
        let mut mixer = ColorMixer::new();
        mixer.set_channel(Channel::Red, 1.0);
        assert_eq!(mixer.current_color(), RED);

        mixer.set_channel(Channel::Red, 0.0);
        assert_eq!(mixer.current_color(), BLACK);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut mixer = ColorMixer::new();
        mixer.set_channel(Channel::Red, 1.7);
        mixer.set_channel(Channel::Green, -0.2);
        mixer.set_channel(Channel::Blue, f64::NAN);

        assert_eq!(mixer.channel(Channel::Red), 1.0);
        assert_eq!(mixer.channel(Channel::Green), 0.0);
        assert_eq!(mixer.channel(Channel::Blue), 0.0);
    }
}
