//! Minecraft 存档查看器 - 命令行入口

use anyhow::Result;
use clap::{Parser, Subcommand};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;
use walkdir::WalkDir;

use mcsave::projection::world_info_in;
use mcsave::{export_raw, export_report, format_epoch_ms, load_with, Config, WorldReport};

/// Minecraft 存档查看器
#[derive(Parser)]
#[command(name = "mcsave", version, about)]
struct Cli {
    /// 配置文件路径
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 显示存档信息
    Info {
        /// 世界文件夹或 level.dat 路径
        #[arg(required = true)]
        worlds: Vec<PathBuf>,
    },
    /// 导出存档信息为 JSON
    Export {
        /// 世界文件夹或 level.dat 路径
        world: PathBuf,
        /// 输出文件路径（默认: <世界名>.json）
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// 导出完整 NBT 树而不是汇总信息
        #[arg(long)]
        raw: bool,
    },
    /// 扫描目录下的所有存档
    Scan {
        /// 存档根目录（如 .minecraft/saves）
        dir: PathBuf,
    },
    /// 生成默认配置文件
    Config {
        /// 输出路径（默认: mcsave.toml）
        #[arg(short, long, default_value = "mcsave.toml")]
        output: PathBuf,
        /// 覆盖已存在的文件
        #[arg(long)]
        force: bool,
    },
}

fn load_config(config_path: Option<PathBuf>) -> Config {
    if let Some(path) = config_path {
        match Config::load_from_file(&path) {
            Ok(config) => {
                eprintln!("已加载配置: {}", path.display());
                return config;
            }
            Err(e) => {
                eprintln!("警告: 无法加载配置 {}: {:#}", path.display(), e);
            }
        }
    }
    Config::load()
}

/// 加载单个存档并渲染文本；失败时返回用户可读的错误信息
fn describe(path: &Path, config: &Config) -> std::result::Result<String, String> {
    let locale = config.display.locale;
    let doc = load_with(path, &config.decode).map_err(|e| e.user_message(locale))?;
    Ok(WorldReport::build(&doc, locale, &config.export).render_text(locale))
}

fn run(cli: Cli) -> Result<bool> {
    let config = load_config(cli.config);
    let locale = config.display.locale;

    match cli.command {
        Commands::Info { worlds } => {
            let start = Instant::now();
            let results: Vec<_> = worlds
                .par_iter()
                .map(|path| (path, describe(path, &config)))
                .collect();

            let mut all_ok = true;
            for (path, result) in results {
                println!("== {}", path.display());
                match result {
                    Ok(text) => println!("{}", text),
                    Err(message) => {
                        eprintln!("错误: {}", message);
                        all_ok = false;
                    }
                }
            }
            log::debug!("耗时: {:.2}s", start.elapsed().as_secs_f64());
            return Ok(all_ok);
        }

        Commands::Export { world, output, raw } => {
            let doc = match load_with(&world, &config.decode) {
                Ok(doc) => doc,
                Err(e) => {
                    eprintln!("错误: {}", e.user_message(locale));
                    return Ok(false);
                }
            };
            let output_path = output.unwrap_or_else(|| {
                let name = world_info_in(&doc, locale).name;
                PathBuf::from(format!("{}.json", sanitize_file_name(&name)))
            });

            if raw {
                export_raw(&doc, &output_path, &config.export)?;
            } else {
                export_report(&doc, &output_path, &config)?;
            }
            println!("数据已保存至: {}", output_path.display());
        }

        Commands::Scan { dir } => {
            let level_files: Vec<PathBuf> = WalkDir::new(&dir)
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| e.file_type().is_file() && e.file_name() == "level.dat")
                .map(|e| e.into_path())
                .collect();

            println!("找到 {} 个存档", level_files.len());

            let mut rows: Vec<(PathBuf, String)> = level_files
                .par_iter()
                .map(|path| {
                    let line = match load_with(path, &config.decode) {
                        Ok(doc) => {
                            let info = world_info_in(&doc, locale);
                            format!(
                                "{} | {} | {}",
                                info.name,
                                info.game_mode.label(locale),
                                format_epoch_ms(info.last_saved_epoch_ms)
                            )
                        }
                        Err(e) => format!("错误: {}", e.user_message(locale)),
                    };
                    (path.clone(), line)
                })
                .collect();
            rows.sort_by(|a, b| a.0.cmp(&b.0));

            for (path, line) in rows {
                let world_dir = path.parent().unwrap_or(&path);
                println!("  {}: {}", world_dir.display(), line);
            }
        }

        Commands::Config { output, force } => {
            if output.exists() && !force {
                anyhow::bail!("文件已存在: {:?}\n使用 --force 覆盖", output);
            }

            Config::default().save_to_file(&output)?;
            println!("已生成配置文件: {:?}", output);
            println!("\n{}", Config::default_toml());
        }
    }

    Ok(true)
}

/// 将世界名称转换为可用的文件名
fn sanitize_file_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    if cleaned.trim().is_empty() {
        "world".to_string()
    } else {
        cleaned
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(Cli::parse()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("错误: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
