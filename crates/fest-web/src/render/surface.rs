// What the frame loop does when the swapchain texture cannot be acquired.

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SurfaceRecovery {
    /// Stale configuration (tab switch, resize race). Reconfigure and skip the frame.
    Reconfigure,
    /// Transient; the next frame retries.
    Skip,
    /// Not recoverable here, report it.
    Fail,
}

pub fn recovery_for(err: &wgpu::SurfaceError) -> SurfaceRecovery {
    match err {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => SurfaceRecovery::Reconfigure,
        wgpu::SurfaceError::Timeout => SurfaceRecovery::Skip,
        _ => SurfaceRecovery::Fail,
    }
}
