//! Shared setup for commands that act on one target

use std::path::{self, Path};

use anyhow::Context;

use lintstep::adapters::{PackageTarget, PathToolResolver, ProjectTarget};
use lintstep::config::ToolConfig;
use lintstep::core::models::InputFile;
use lintstep::core::ports::SourceEnumerator;
use lintstep::{BuildToolPlugin, PluginContext};

use crate::cli::TargetArgs;

/// Everything needed to create the build commands of one target
pub struct Prepared {
    pub plugin: BuildToolPlugin<PathToolResolver>,
    pub context: PluginContext,
    pub target: Box<dyn SourceEnumerator>,
}

/// Load configuration and build the plugin, context and target from CLI args
pub fn prepare(args: &TargetArgs, config_path: Option<&Path>) -> anyhow::Result<Prepared> {
    let mut config = match config_path {
        Some(path) => ToolConfig::load_from(path)?,
        None => ToolConfig::load_for_project(&args.project_dir)?,
    };
    if args.tool_path.is_some() {
        config.tool_path.clone_from(&args.tool_path);
    }

    let target: Box<dyn SourceEnumerator> = match &args.target_dir {
        Some(dir) => Box::new(PackageTarget::new(&args.target_name, dir)),
        None if args.inputs.is_empty() => {
            Box::new(PackageTarget::without_sources(&args.target_name))
        },
        None => {
            let inputs = args
                .inputs
                .iter()
                .map(|path| InputFile::classify(path, &config.source_suffix))
                .collect();
            Box::new(ProjectTarget::new(&args.target_name, inputs))
        },
    };

    let project_dir = path::absolute(&args.project_dir)
        .with_context(|| format!("invalid project directory {}", args.project_dir.display()))?;
    let work_dir = path::absolute(&args.work_dir)
        .with_context(|| format!("invalid work directory {}", args.work_dir.display()))?;

    let plugin = BuildToolPlugin::new(PathToolResolver::new(config.tool_path.clone()));
    let context = PluginContext::new(project_dir, work_dir).with_config(config);

    Ok(Prepared {
        plugin,
        context,
        target,
    })
}
