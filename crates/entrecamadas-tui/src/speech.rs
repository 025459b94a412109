//! Narration through the platform synthesizer.
//!
//! Each utterance is one child process (`say` on macOS, `espeak-ng` or
//! `espeak` elsewhere). Pause and resume stop and continue the process with
//! `SIGSTOP` / `SIGCONT`; completion is observed by polling its exit status.

use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};

use entrecamadas_core::narration::{SpeechError, SpeechEvent};
use entrecamadas_core::{SpeechBackend, SpeechRequest};

/// Default speaking speed of the synthesizers, in words per minute
const BASE_WPM: f32 = 175.0;
/// Pitch at multiplier 1.0 on the espeak 0-99 scale
const BASE_PITCH: f32 = 50.0;

#[derive(Debug, Clone, PartialEq)]
pub enum Synthesizer {
    /// macOS `say`
    Say(PathBuf),
    /// `espeak-ng` or `espeak`
    Espeak(PathBuf),
    /// User-configured program, called as `<program> <text>`
    Custom(String),
}

impl Synthesizer {
    /// Arguments for one utterance
    pub fn args(&self, request: &SpeechRequest) -> Vec<String> {
        let wpm = (BASE_WPM * request.rate).round() as u32;
        match self {
            Synthesizer::Say(_) => vec![
                "-r".to_string(),
                wpm.to_string(),
                request.text.clone(),
            ],
            Synthesizer::Espeak(_) => {
                let pitch = (BASE_PITCH * request.pitch).round().clamp(0.0, 99.0) as u32;
                vec![
                    "-v".to_string(),
                    request.language.to_lowercase(),
                    "-s".to_string(),
                    wpm.to_string(),
                    "-p".to_string(),
                    pitch.to_string(),
                    "--".to_string(),
                    request.text.clone(),
                ]
            }
            Synthesizer::Custom(_) => vec![request.text.clone()],
        }
    }

    fn program(&self) -> &Path {
        match self {
            Synthesizer::Say(path) | Synthesizer::Espeak(path) => path,
            Synthesizer::Custom(program) => Path::new(program),
        }
    }
}

pub struct SystemSpeech {
    synthesizer: Option<Synthesizer>,
    child: Option<Child>,
}

impl SystemSpeech {
    /// Use `command` if given, otherwise look for a synthesizer on `PATH`
    pub fn detect(command: Option<&str>) -> Self {
        let synthesizer = match command.map(str::trim).filter(|c| !c.is_empty()) {
            Some(command) => Some(Synthesizer::Custom(command.to_string())),
            None => find_synthesizer(),
        };
        match &synthesizer {
            Some(s) => tracing::info!(synthesizer = ?s, "speech synthesizer found"),
            None => tracing::warn!("No speech synthesizer found, narration disabled"),
        }
        Self::with_synthesizer(synthesizer)
    }

    /// A backend that reports narration as unavailable
    pub fn disabled() -> Self {
        Self::with_synthesizer(None)
    }

    pub fn with_synthesizer(synthesizer: Option<Synthesizer>) -> Self {
        Self {
            synthesizer,
            child: None,
        }
    }

    pub fn synthesizer(&self) -> Option<&Synthesizer> {
        self.synthesizer.as_ref()
    }

    fn signal_child(&self, signal: Signal) -> Result<(), SpeechError> {
        match &self.child {
            Some(child) => send_signal(child.id(), signal),
            None => Ok(()),
        }
    }
}

impl SpeechBackend for SystemSpeech {
    fn is_available(&self) -> bool {
        self.synthesizer.is_some()
    }

    fn start(&mut self, request: &SpeechRequest) -> Result<(), SpeechError> {
        self.cancel();
        let synthesizer = self.synthesizer.as_ref().ok_or(SpeechError::Unavailable)?;
        let child = Command::new(synthesizer.program())
            .args(synthesizer.args(request))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(SpeechError::Spawn)?;
        tracing::debug!(pid = child.id(), "synthesizer started");
        self.child = Some(child);
        Ok(())
    }

    fn pause(&mut self) -> Result<(), SpeechError> {
        self.signal_child(Signal::Stop)
    }

    fn resume(&mut self) -> Result<(), SpeechError> {
        self.signal_child(Signal::Continue)
    }

    fn cancel(&mut self) {
        if let Some(mut child) = self.child.take() {
            // SIGKILL also ends a stopped process
            if let Err(e) = child.kill() {
                tracing::debug!("Synthesizer already gone: {}", e);
            }
            let _ = child.wait();
        }
    }

    fn poll(&mut self) -> Option<SpeechEvent> {
        let child = self.child.as_mut()?;
        match child.try_wait() {
            Ok(None) => None,
            Ok(Some(status)) => {
                self.child = None;
                if status.success() {
                    Some(SpeechEvent::Finished)
                } else {
                    Some(SpeechEvent::Failed(format!("synthesizer exited with {}", status)))
                }
            }
            Err(e) => {
                self.cancel();
                Some(SpeechEvent::Failed(e.to_string()))
            }
        }
    }
}

impl Drop for SystemSpeech {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn find_synthesizer() -> Option<Synthesizer> {
    if cfg!(target_os = "macos") {
        if let Some(path) = find_on_path("say") {
            return Some(Synthesizer::Say(path));
        }
    }
    ["espeak-ng", "espeak"]
        .iter()
        .find_map(|name| find_on_path(name))
        .map(Synthesizer::Espeak)
}

fn find_on_path(program: &str) -> Option<PathBuf> {
    let paths = std::env::var_os("PATH")?;
    std::env::split_paths(&paths)
        .map(|dir| dir.join(program))
        .find(|candidate| candidate.is_file())
}

#[derive(Debug, Clone, Copy)]
enum Signal {
    Stop,
    Continue,
}

#[cfg(unix)]
fn send_signal(pid: u32, signal: Signal) -> Result<(), SpeechError> {
    let sig = match signal {
        Signal::Stop => libc::SIGSTOP,
        Signal::Continue => libc::SIGCONT,
    };
    let rc = unsafe { libc::kill(pid as libc::pid_t, sig) };
    if rc == 0 {
        Ok(())
    } else {
        Err(SpeechError::Signal(std::io::Error::last_os_error()))
    }
}

#[cfg(not(unix))]
fn send_signal(_pid: u32, _signal: Signal) -> Result<(), SpeechError> {
    Err(SpeechError::Unavailable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn request(text: &str, pitch: f32) -> SpeechRequest {
        SpeechRequest {
            text: text.to_string(),
            language: "en-US".to_string(),
            rate: 1.0,
            pitch,
        }
    }

    #[test]
    fn test_espeak_args() {
        let synth = Synthesizer::Espeak(PathBuf::from("/usr/bin/espeak-ng"));
        assert_eq!(
            synth.args(&request("-hello", 1.1)),
            vec!["-v", "en-us", "-s", "175", "-p", "55", "--", "-hello"]
        );
    }

    #[test]
    fn test_say_args() {
        let synth = Synthesizer::Say(PathBuf::from("/usr/bin/say"));
        assert_eq!(synth.args(&request("hi", 0.9)), vec!["-r", "175", "hi"]);
    }

    #[test]
    fn test_custom_command_gets_text_only() {
        let speech = SystemSpeech::detect(Some(" my-tts "));
        assert_eq!(speech.synthesizer(), Some(&Synthesizer::Custom("my-tts".into())));
        assert_eq!(
            Synthesizer::Custom("my-tts".into()).args(&request("words", 1.0)),
            vec!["words"]
        );
    }

    #[test]
    fn test_disabled_backend() {
        let mut speech = SystemSpeech::disabled();
        assert!(!speech.is_available());
        assert!(matches!(speech.start(&request("x", 1.0)), Err(SpeechError::Unavailable)));
        assert!(speech.poll().is_none());
        assert!(speech.pause().is_ok());
    }

    #[test]
    fn test_missing_program_fails_to_spawn() {
        let mut speech = SystemSpeech::with_synthesizer(Some(Synthesizer::Custom(
            "/nonexistent/entrecamadas-tts".into(),
        )));
        assert!(matches!(speech.start(&request("x", 1.0)), Err(SpeechError::Spawn(_))));
    }

    #[cfg(unix)]
    fn wait_for_event(speech: &mut SystemSpeech) -> Option<SpeechEvent> {
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            if let Some(event) = speech.poll() {
                return Some(event);
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        None
    }

    #[cfg(unix)]
    #[test]
    fn test_completion_is_polled() {
        let mut speech = SystemSpeech::with_synthesizer(Some(Synthesizer::Custom("true".into())));
        speech.start(&request("done", 1.0)).unwrap();
        assert_eq!(wait_for_event(&mut speech), Some(SpeechEvent::Finished));
        assert!(speech.poll().is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_is_failure() {
        let mut speech = SystemSpeech::with_synthesizer(Some(Synthesizer::Custom("false".into())));
        speech.start(&request("oops", 1.0)).unwrap();
        assert!(matches!(wait_for_event(&mut speech), Some(SpeechEvent::Failed(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_pause_resume_cancel() {
        let mut speech = SystemSpeech::with_synthesizer(Some(Synthesizer::Custom("sleep".into())));
        speech.start(&request("5", 1.0)).unwrap();
        speech.pause().unwrap();
        speech.resume().unwrap();
        assert!(speech.poll().is_none());

        speech.cancel();
        assert!(speech.poll().is_none());
    }
}
