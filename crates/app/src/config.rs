//! Command-line flags.
//!
//! Accepted: `--gpu-backend=auto|vulkan|dx12|metal|gl`, `--show-fps[=on|off]`,
//! `--size=WxH`, `--width=N`, `--height=N`, `--camera=1..5`, `--wireframe`.
//! Malformed values log a warning and keep the default.

use corelib::{CameraPreset, RenderMode};
use platform::RunConfig;

pub fn parse_args<I, S>(args: I) -> RunConfig
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut config = RunConfig::default();
    let mut width: Option<u32> = None;
    let mut height: Option<u32> = None;

    for arg in args {
        let arg = arg.as_ref();
        if let Some(val) = arg.strip_prefix("--gpu-backend=") {
            config.backends = parse_backend(val);
        } else if arg == "--show-fps" {
            config.show_fps = true;
        } else if let Some(val) = arg.strip_prefix("--show-fps=") {
            config.show_fps = matches!(
                val.to_ascii_lowercase().as_str(),
                "1" | "true" | "on" | "yes"
            );
        } else if let Some(v) = arg.strip_prefix("--size=") {
            match v.split_once('x').or_else(|| v.split_once('X')) {
                Some((sw, sh)) => match (sw.parse::<u32>(), sh.parse::<u32>()) {
                    (Ok(pw), Ok(ph)) => {
                        width = Some(pw);
                        height = Some(ph);
                    }
                    _ => log::warn!("Malformed size '{}', expected WxH.", v),
                },
                None => log::warn!("Malformed size '{}', expected WxH.", v),
            }
        } else if let Some(v) = arg.strip_prefix("--width=") {
            match v.parse::<u32>() {
                Ok(pw) => width = Some(pw),
                Err(_) => log::warn!("Malformed width '{}'.", v),
            }
        } else if let Some(v) = arg.strip_prefix("--height=") {
            match v.parse::<u32>() {
                Ok(ph) => height = Some(ph),
                Err(_) => log::warn!("Malformed height '{}'.", v),
            }
        } else if let Some(v) = arg.strip_prefix("--camera=") {
            match v.parse::<u8>().map(CameraPreset::try_from) {
                Ok(Ok(preset)) => config.camera = preset,
                Ok(Err(e)) => log::warn!("{e}, keeping {:?}.", config.camera),
                Err(_) => log::warn!("Malformed camera '{}', keeping {:?}.", v, config.camera),
            }
        } else if arg == "--wireframe" {
            config.render_mode = RenderMode::Wireframe;
        }
    }

    config.width = width.unwrap_or(config.width).max(1);
    config.height = height.unwrap_or(config.height).max(1);
    config
}

fn parse_backend(val: &str) -> wgpu::Backends {
    match val.to_ascii_lowercase().as_str() {
        "auto" => wgpu::Backends::all(),
        "vulkan" | "vk" => wgpu::Backends::VULKAN,
        "dx12" | "d3d12" => wgpu::Backends::DX12,
        "metal" | "mtl" => wgpu::Backends::METAL,
        "gl" | "opengl" | "gles" => wgpu::Backends::GL,
        other => {
            log::warn!("Unknown backend '{}', falling back to auto.", other);
            wgpu::Backends::all()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_flags() {
        let config = parse_args(["heliscene"]);
        assert_eq!(config.backends, wgpu::Backends::all());
        assert!(!config.show_fps);
        assert_eq!((config.width, config.height), (1280, 720));
        assert_eq!(config.camera, CameraPreset::Axonometric);
        assert_eq!(config.render_mode, RenderMode::Filled);
    }

    #[test]
    fn backend_names() {
        let cases = [
            ("vulkan", wgpu::Backends::VULKAN),
            ("VK", wgpu::Backends::VULKAN),
            ("d3d12", wgpu::Backends::DX12),
            ("mtl", wgpu::Backends::METAL),
            ("gles", wgpu::Backends::GL),
            ("software", wgpu::Backends::all()),
        ];
        for (name, expected) in cases {
            let config = parse_args([format!("--gpu-backend={name}")]);
            assert_eq!(config.backends, expected, "{name}");
        }
    }

    #[test]
    fn show_fps_forms() {
        assert!(parse_args(["--show-fps"]).show_fps);
        assert!(parse_args(["--show-fps=on"]).show_fps);
        assert!(!parse_args(["--show-fps=off"]).show_fps);
        assert!(!parse_args(["--show-fps", "--show-fps=0"]).show_fps);
    }

    #[test]
    fn size_flags() {
        let config = parse_args(["--size=800x600"]);
        assert_eq!((config.width, config.height), (800, 600));

        let config = parse_args(["--size=800X600", "--height=500"]);
        assert_eq!((config.width, config.height), (800, 500));

        let config = parse_args(["--size=huge", "--width=0"]);
        assert_eq!((config.width, config.height), (1, 720));
    }

    #[test]
    fn camera_and_wireframe() {
        let config = parse_args(["--camera=5", "--wireframe"]);
        assert_eq!(config.camera, CameraPreset::Chase);
        assert_eq!(config.render_mode, RenderMode::Wireframe);

        assert_eq!(parse_args(["--camera=9"]).camera, CameraPreset::Axonometric);
        assert_eq!(parse_args(["--camera=top"]).camera, CameraPreset::Axonometric);
    }
}
