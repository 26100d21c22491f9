// Host-side tests for swapchain error handling.

mod surface {
    include!("../src/render/surface.rs");
}

use surface::{recovery_for, SurfaceRecovery};

#[test]
fn stale_surfaces_are_reconfigured_not_reported() {
    assert_eq!(
        recovery_for(&wgpu::SurfaceError::Lost),
        SurfaceRecovery::Reconfigure
    );
    assert_eq!(
        recovery_for(&wgpu::SurfaceError::Outdated),
        SurfaceRecovery::Reconfigure
    );
}

#[test]
fn timeout_skips_a_single_frame() {
    assert_eq!(
        recovery_for(&wgpu::SurfaceError::Timeout),
        SurfaceRecovery::Skip
    );
}

#[test]
fn out_of_memory_is_reported() {
    assert_eq!(
        recovery_for(&wgpu::SurfaceError::OutOfMemory),
        SurfaceRecovery::Fail
    );
}
