//! Operating system entropy.
//!
//! Each platform submodule exposes the same `sys_random` function, selected
//! at compile time. It is the only place the crate talks to the operating
//! system, and it is used solely to seed [`crate::rng::Csprng`].

#[cfg(any(target_os = "linux", target_os = "android"))]
mod linux;

#[cfg(any(target_os = "linux", target_os = "android"))]
pub(crate) use linux::sys_random;

#[cfg(any(target_os = "macos", target_os = "ios"))]
mod macos;

#[cfg(any(target_os = "macos", target_os = "ios"))]
pub(crate) use macos::sys_random;

#[cfg(target_os = "windows")]
mod windows;

#[cfg(target_os = "windows")]
pub(crate) use windows::sys_random;
