//! Linux implementations backed by `poll(2)`.
//!
//! [`AdcStream`] wraps the ADC character device opened `O_RDONLY | O_NONBLOCK`.
//! [`PollWaitPoint`] multiplexes the control channel and the source fd through
//! a single `poll(2)` call with the tick as its timeout.

use std::fs::{File, OpenOptions};
use std::io::Read;
use std::os::unix::fs::OpenOptionsExt;
use std::os::unix::io::{AsRawFd, RawFd};
use std::path::Path;
use std::time::Duration;

use tracing::debug;

use crate::error::{StreamError, StreamResult};
use crate::record::{DRAIN_CHUNK_RECORDS, SampleRecord};
use crate::source::SampleSource;
use crate::wait::{WaitPoint, Wake};

/// Conversion-trigger request understood by the ADC character driver.
const ADC_TRIGGER_REQUEST: libc::c_ulong = 0x2301;

/// Bound for one control-channel discard read.
const CONTROL_DISCARD_BYTES: usize = 16;

fn last_errno() -> i32 {
    std::io::Error::last_os_error().raw_os_error().unwrap_or(0)
}

/// Non-blocking handle to the streaming ADC device.
///
/// Opened once at startup and held for the life of the process. The handle
/// owns the fd; dropping it closes the device.
#[derive(Debug)]
pub struct AdcStream {
    file: File,
    path: String,
}

impl AdcStream {
    /// Open the device non-blocking.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::Open`] if the device cannot be opened. Callers
    /// are expected to proceed without a source in that case.
    pub fn open(path: impl AsRef<Path>) -> StreamResult<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .read(true)
            .custom_flags(libc::O_NONBLOCK)
            .open(path)
            .map_err(|err| StreamError::Open {
                path: path.display().to_string(),
                errno: err.raw_os_error().unwrap_or(0),
            })?;

        Ok(Self {
            file,
            path: path.display().to_string(),
        })
    }

    /// Request continuous conversions from the driver.
    ///
    /// Best-effort: the hardware may already be streaming from board
    /// bring-up, so callers log a failure and keep the handle open.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::TriggerFailed`] if the driver rejects the
    /// request.
    pub fn start_acquisition(&self) -> StreamResult<()> {
        // SAFETY: the fd is owned by `self.file` and stays valid for the call.
        let rc = unsafe { libc::ioctl(self.file.as_raw_fd(), ADC_TRIGGER_REQUEST, 0) };
        if rc < 0 {
            return Err(StreamError::TriggerFailed { errno: last_errno() });
        }
        debug!(path = %self.path, "acquisition triggered");
        Ok(())
    }

    /// The device path this stream was opened from.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl AsRawFd for AdcStream {
    fn as_raw_fd(&self) -> RawFd {
        self.file.as_raw_fd()
    }
}

impl SampleSource for AdcStream {
    fn is_open(&self) -> bool {
        true
    }

    fn poll_ready(&self) -> bool {
        let mut fds = [libc::pollfd {
            fd: self.file.as_raw_fd(),
            events: libc::POLLIN,
            revents: 0,
        }];
        // SAFETY: `fds` points at one valid pollfd for the duration of the call.
        let rc = unsafe { libc::poll(fds.as_mut_ptr(), 1, 0) };
        rc > 0 && (fds[0].revents & libc::POLLIN) != 0
    }

    fn read_records(&mut self, buf: &mut [SampleRecord]) -> StreamResult<usize> {
        let mut wire = [0u8; DRAIN_CHUNK_RECORDS * SampleRecord::SIZE];
        let limit = buf.len().min(DRAIN_CHUNK_RECORDS) * SampleRecord::SIZE;

        let read = match self.file.read(&mut wire[..limit]) {
            Ok(n) => n,
            Err(err) if err.kind() == std::io::ErrorKind::WouldBlock => 0,
            Err(err) => {
                return Err(StreamError::Read {
                    errno: err.raw_os_error().unwrap_or(0),
                });
            }
        };

        // Partial trailing bytes of an in-flight record are dropped; the
        // stream is being discarded anyway.
        let records = read / SampleRecord::SIZE;
        for (slot, chunk) in buf
            .iter_mut()
            .zip(wire.chunks_exact(SampleRecord::SIZE))
            .take(records)
        {
            let mut bytes = [0u8; SampleRecord::SIZE];
            bytes.copy_from_slice(chunk);
            *slot = SampleRecord::from_wire(bytes);
        }

        Ok(records)
    }
}

/// `poll(2)`-backed readiness primitive.
///
/// Watches the control channel fd and, when a source is attached, the sample
/// fd. With no source attached only the control interest is registered, which
/// is the run-with-drain-disabled mode.
#[derive(Debug)]
pub struct PollWaitPoint {
    control: RawFd,
    source: Option<RawFd>,
}

impl PollWaitPoint {
    /// Create a wait point over an explicit control fd.
    #[must_use]
    pub fn new(control: RawFd, source: Option<RawFd>) -> Self {
        Self { control, source }
    }

    /// Create a wait point over stdin and an optional source fd.
    #[must_use]
    pub fn from_stdin(source: Option<RawFd>) -> Self {
        Self::new(libc::STDIN_FILENO, source)
    }
}

impl WaitPoint for PollWaitPoint {
    fn wait(&mut self, tick: Duration) -> StreamResult<Wake> {
        let mut fds = [
            libc::pollfd {
                fd: self.control,
                events: libc::POLLIN,
                revents: 0,
            },
            libc::pollfd {
                fd: self.source.unwrap_or(-1),
                events: libc::POLLIN,
                revents: 0,
            },
        ];
        let nfds = if self.source.is_some() { 2 } else { 1 };
        let timeout = i32::try_from(tick.as_millis()).unwrap_or(i32::MAX);

        // SAFETY: `fds` points at `nfds` valid pollfds for the duration of
        // the call.
        let rc = unsafe { libc::poll(fds.as_mut_ptr(), nfds, timeout) };
        if rc < 0 {
            let errno = last_errno();
            if errno == libc::EINTR {
                return Ok(Wake::TIMEOUT);
            }
            return Err(StreamError::WaitFailed { errno });
        }

        Ok(Wake {
            control_ready: (fds[0].revents & libc::POLLIN) != 0,
            source_ready: self.source.is_some() && (fds[1].revents & libc::POLLIN) != 0,
        })
    }

    fn discard_control(&mut self) -> StreamResult<usize> {
        let mut throwaway = [0u8; CONTROL_DISCARD_BYTES];
        // SAFETY: the buffer outlives the call and its length is passed as
        // the read bound.
        let rc = unsafe {
            libc::read(
                self.control,
                throwaway.as_mut_ptr().cast(),
                throwaway.len(),
            )
        };
        if rc < 0 {
            let errno = last_errno();
            if errno == libc::EAGAIN || errno == libc::EWOULDBLOCK {
                return Ok(0);
            }
            return Err(StreamError::Read { errno });
        }
        Ok(usize::try_from(rc).unwrap_or(0))
    }

    fn pause(&mut self, idle: Duration) {
        std::thread::sleep(idle);
    }
}
