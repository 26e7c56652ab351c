//! Error Types
//!
//! This module defines the error types used by the viewport host.
//!
//! # Overview
//!
//! The main error type [`ChompError`] covers the failure modes of bringing a
//! window and a GPU device online:
//! - GPU adapter and device initialization failures
//! - Surface creation and configuration errors
//! - Window and event loop errors
//!
//! The animation driver and the scene graph are infallible and never return
//! this type.
//!
//! # Usage
//!
//! Fallible host APIs return [`Result<T>`] which is an alias for
//! `std::result::Result<T, ChompError>`.

use thiserror::Error;

/// The main error type for the viewport host.
#[derive(Error, Debug)]
pub enum ChompError {
    // ========================================================================
    // GPU & Rendering Errors
    // ========================================================================
    /// Failed to request a compatible GPU adapter.
    #[error("Failed to request WGPU adapter: {0}")]
    AdapterRequestFailed(String),

    /// Failed to create the GPU device.
    #[error("Failed to create WGPU device: {0}")]
    DeviceCreateFailed(#[from] wgpu::RequestDeviceError),

    /// Failed to create a presentation surface for the window.
    #[error("Failed to create surface: {0}")]
    SurfaceCreateFailed(#[from] wgpu::CreateSurfaceError),

    /// The adapter cannot present to the surface.
    #[error("Surface not supported by adapter")]
    SurfaceUnsupported,

    // ========================================================================
    // Window Errors
    // ========================================================================
    /// Window system error.
    #[error("Window system error: {0}")]
    WindowError(#[from] raw_window_handle::HandleError),

    /// The OS refused to create a window.
    #[error("Window creation failed: {0}")]
    WindowCreateFailed(#[from] winit::error::OsError),

    /// Event loop error (winit).
    #[error("Event loop error: {0}")]
    EventLoopError(#[from] winit::error::EventLoopError),
}

/// Alias for `Result<T, ChompError>`.
pub type Result<T> = std::result::Result<T, ChompError>;
