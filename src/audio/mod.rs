pub mod headless;

pub use headless::HeadlessAudio;

/// One tree's continuously sounding voice: a running oscillator plus its
/// amplitude-wobble modulator. Sound starts when the voice is spawned and
/// only ends on `stop`.
pub trait TreeVoice {
    fn set_carrier_frequency(&mut self, hz: f32);
    fn set_vibrato_rate(&mut self, hz: f32);
    /// Stop the oscillator and release the voice. The handle must not be
    /// used afterwards.
    fn stop(&mut self);
}

/// The audio collaborator: spawns voices and pauses or resumes the whole
/// mix when the page loses or regains visibility.
pub trait AudioService {
    fn spawn_voice(&mut self, carrier_hz: f32, vibrato_hz: f32) -> Box<dyn TreeVoice>;
    fn set_suspended(&mut self, suspended: bool);
}
