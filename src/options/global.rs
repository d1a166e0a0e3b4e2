//! The process-wide options instance.
//!
//! Created with default values on first access and kept for the lifetime of
//! the process. Every accessor takes the lock once for its whole duration,
//! so a grouped setter's changes become visible together. The intended
//! pattern is still to configure once at startup and read afterwards.

use std::path::Path;
use std::sync::OnceLock;

use parking_lot::RwLock;

use super::{DrawDefaults, Options, VideoDefaults};
use crate::error::Cv3Error;

static GLOBAL: OnceLock<RwLock<Options>> = OnceLock::new();

fn global() -> &'static RwLock<Options> {
    GLOBAL.get_or_init(|| RwLock::new(Options::default()))
}

/// Returns a snapshot of the current options.
pub fn options() -> Options {
    global().read().clone()
}

/// Runs `f` with shared access to the current options.
///
/// The read lock is held while `f` runs and the lock is not reentrant: `f`
/// must not call [`update`] or any setter in this module, and should not
/// call [`options`] or `with_options` either, since a nested read can block
/// behind a waiting writer.
pub fn with_options<R>(f: impl FnOnce(&Options) -> R) -> R {
    f(&global().read())
}

/// Runs `f` with exclusive access. Assignments made here are not validated.
///
/// The write lock is held while `f` runs. Calling any accessor of this
/// module from inside `f`, including [`options`] and [`with_options`],
/// deadlocks. Read what you need before the call:
///
/// ```
/// use cv3::options;
///
/// let scale = options::options().scale;
/// options::update(|o| o.scale = scale * 2.0);
/// assert_eq!(options::options().scale, scale * 2.0);
/// ```
pub fn update<R>(f: impl FnOnce(&mut Options) -> R) -> R {
    let mut guard = global().write();
    f(&mut guard)
}

/// Swaps in `new` and returns the previous options.
pub fn replace_options(new: Options) -> Options {
    log::debug!("replacing global options");
    update(|opts| std::mem::replace(opts, new))
}

/// Restores the default options.
pub fn reset_options() {
    log::debug!("resetting global options to defaults");
    update(|opts| *opts = Options::default());
}

/// Interprets color tuples red-first.
pub fn set_rgb() {
    log::debug!("color order set to RGB");
    update(Options::set_rgb);
}

/// Interprets color tuples blue-first.
pub fn set_bgr() {
    log::debug!("color order set to BGR");
    update(Options::set_bgr);
}

pub fn set_experimental(enabled: bool) {
    log::debug!("experimental functionality enabled: {}", enabled);
    update(|opts| opts.set_experimental(enabled));
}

/// Validated, all-or-nothing update of the draw defaults. See [`Options::set_draw`].
pub fn set_draw(draw: DrawDefaults) -> Result<(), Cv3Error> {
    log::debug!("updating draw defaults: {:?}", draw);
    update(|opts| opts.set_draw(draw))
}

/// Validated, all-or-nothing update of the video defaults. See [`Options::set_video`].
pub fn set_video(video: VideoDefaults) -> Result<(), Cv3Error> {
    log::debug!("updating video defaults: {:?}", video);
    update(|opts| opts.set_video(video))
}

/// Replaces the global options with the contents of a config file.
///
/// The file is read and parsed before the lock is taken; on error the
/// current options are left untouched.
pub fn load_options(path: &Path) -> Result<(), Cv3Error> {
    let loaded = Options::from_path(path)?;
    update(|opts| *opts = loaded);
    log::info!("global options loaded from {}", path.display());
    Ok(())
}
