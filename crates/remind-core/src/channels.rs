//! Desktop notification channels.
//!
//! Three concrete [`NotificationChannel`] implementations: the transient
//! toast, the blocking popup dialog, and audio playback. Channel choice
//! per reminder is the dispatcher's job; each channel here only knows how
//! to deliver one payload.

use std::fs::File;
use std::io::BufReader;
use std::time::Duration;

use rodio::source::SineWave;
use rodio::{Decoder, OutputStream, Sink, Source};
use tracing::debug;

use crate::notify::{DeliveryError, Notification, NotificationChannel, SoundSource};

/// Transient desktop toast, the channel for normal reminders.
#[derive(Debug, Clone)]
pub struct ToastChannel {
    /// How long the toast stays on screen.
    pub timeout: Duration,
}

impl Default for ToastChannel {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(5),
        }
    }
}

impl NotificationChannel for ToastChannel {
    fn name(&self) -> &'static str {
        "toast"
    }

    fn deliver(&self, notification: &Notification) -> Result<(), DeliveryError> {
        debug!("showing toast for '{}'", notification.title);
        notify_rust::Notification::new()
            .appname("remind")
            .summary(&notification.title)
            .body(&notification.body)
            .timeout(notify_rust::Timeout::Milliseconds(
                self.timeout.as_millis() as u32
            ))
            .show()
            .map(|_| ())
            .map_err(|e| DeliveryError::Backend(e.to_string()))
    }
}

/// Modal message box, the visual half of an important reminder.
///
/// Blocks until dismissed, which is why the dispatcher starts audio on a
/// separate thread before showing it.
#[derive(Debug, Clone, Default)]
pub struct PopupChannel;

impl NotificationChannel for PopupChannel {
    fn name(&self) -> &'static str {
        "popup"
    }

    fn deliver(&self, notification: &Notification) -> Result<(), DeliveryError> {
        debug!("showing popup for '{}'", notification.title);
        rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Warning)
            .set_title(notification.title.as_str())
            .set_description(notification.body.as_str())
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
        Ok(())
    }
}

/// Audio playback, the audible half of an important reminder.
///
/// Decodes whatever the asset turns out to be (MP3, WAV, OGG, FLAC).
/// Playback is synchronous; the dispatcher isolates it on its own thread.
#[derive(Debug, Clone)]
pub struct SoundChannel {
    /// Hard ceiling on playback length, applied on top of any per-reminder
    /// cap. Keeps a runaway asset from stalling a check pass.
    pub max_secs: f32,
}

impl Default for SoundChannel {
    fn default() -> Self {
        Self { max_secs: 20.0 }
    }
}

impl SoundChannel {
    /// Effective cap for a request: the smaller of the channel ceiling and
    /// the per-reminder cap, when set.
    fn cap(&self, requested: Option<f32>) -> Duration {
        let secs = match requested {
            Some(r) if r > 0.0 => r.min(self.max_secs),
            _ => self.max_secs,
        };
        Duration::from_secs_f32(secs)
    }
}

impl NotificationChannel for SoundChannel {
    fn name(&self) -> &'static str {
        "sound"
    }

    fn deliver(&self, notification: &Notification) -> Result<(), DeliveryError> {
        let Some(request) = &notification.sound else {
            return Ok(());
        };

        let source: Box<dyn Source<Item = f32> + Send> = match &request.source {
            SoundSource::File(path) => {
                if !path.exists() {
                    return Err(DeliveryError::MissingAsset(path.clone()));
                }
                let file = File::open(path)
                    .map_err(|e| DeliveryError::Undecodable(e.to_string()))?;
                let decoder = Decoder::new(BufReader::new(file))
                    .map_err(|e| DeliveryError::Undecodable(e.to_string()))?;
                debug!("playing {} (cap {:?})", path.display(), self.cap(request.max_secs));
                Box::new(
                    decoder
                        .convert_samples::<f32>()
                        .take_duration(self.cap(request.max_secs)),
                )
            }
            SoundSource::Default => Box::new(
                SineWave::new(880.0)
                    .take_duration(Duration::from_millis(400))
                    .amplify(0.25),
            ),
        };

        let (_stream, handle) =
            OutputStream::try_default().map_err(|_| DeliveryError::NoOutputDevice)?;
        let sink = Sink::try_new(&handle).map_err(|e| DeliveryError::Backend(e.to_string()))?;
        sink.append(source);
        sink.sleep_until_end();
        Ok(())
    }
}
