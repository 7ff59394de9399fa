use super::{AudioService, TreeVoice};

/// Audio implementation with no backend: voices only track their control
/// values, and log lines stand in for sound.
pub struct HeadlessAudio {
    suspended: bool,
    spawned: u64,
}

impl HeadlessAudio {
    pub fn new() -> Self {
        Self {
            suspended: false,
            spawned: 0,
        }
    }
}

impl Default for HeadlessAudio {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioService for HeadlessAudio {
    fn spawn_voice(&mut self, carrier_hz: f32, vibrato_hz: f32) -> Box<dyn TreeVoice> {
        self.spawned += 1;
        let label = format!("voice-{}", self.spawned);
        log::debug!("audio: {label} started at {carrier_hz:.1} Hz, wobble {vibrato_hz:.3} Hz");
        Box::new(HeadlessVoice { label })
    }

    fn set_suspended(&mut self, suspended: bool) {
        if self.suspended != suspended {
            log::info!(
                "audio: {}",
                if suspended { "suspended" } else { "resumed" }
            );
        }
        self.suspended = suspended;
    }
}

struct HeadlessVoice {
    label: String,
}

impl TreeVoice for HeadlessVoice {
    fn set_carrier_frequency(&mut self, hz: f32) {
        log::debug!("audio: {} carrier {hz:.1} Hz", self.label);
    }

    fn set_vibrato_rate(&mut self, hz: f32) {
        log::debug!("audio: {} wobble {hz:.3} Hz", self.label);
    }

    fn stop(&mut self) {
        log::debug!("audio: {} stopped", self.label);
    }
}
