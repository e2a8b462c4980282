use clap::Parser;
use std::path::{Path, PathBuf};
use tokio::process::Command;

mod cli;

const BUNDLE_DIR: &str = "Ringua";
const LAUNCHER: &str = "ringua-launcher";

async fn run(cmd: &mut Command) -> Result<(), Box<dyn std::error::Error>> {
    let status = cmd.spawn()?.wait().await?;
    if !status.success() {
        return Err(format!("{:?} exited with {}", cmd.as_std(), status).into());
    }
    Ok(())
}

fn trunk_build(release: bool) -> Result<Command, Box<dyn std::error::Error>> {
    let mut cmd = Command::new("trunk");
    cmd.current_dir(std::fs::canonicalize("frontend")?);
    cmd.arg("build");
    if release {
        cmd.arg("--release");
    }
    Ok(cmd)
}

fn launcher_binary(target_triple: Option<&str>) -> PathBuf {
    let mut path = PathBuf::from("target");
    if let Some(triple) = target_triple {
        path.push(triple);
    }
    path.push("release");
    path.push(format!("{}{}", LAUNCHER, std::env::consts::EXE_SUFFIX));
    path
}

async fn copy_dir(from: &Path, to: &Path) -> Result<(), Box<dyn std::error::Error>> {
    tokio::fs::create_dir_all(to).await?;
    let mut entries = tokio::fs::read_dir(from).await?;
    while let Some(entry) = entries.next_entry().await? {
        let target = to.join(entry.file_name());
        if entry.file_type().await?.is_dir() {
            Box::pin(copy_dir(&entry.path(), &target)).await?;
        } else {
            tokio::fs::copy(entry.path(), target).await?;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = cli::Cli::parse();

    match cli.command {
        cli::Command::Launch { port } => {
            run(&mut trunk_build(false)?).await?;

            let mut cmd = Command::new("cargo");
            cmd.arg("run")
                .arg("--package")
                .arg(LAUNCHER)
                .arg("--")
                .arg("--dist-dir")
                .arg("frontend/dist")
                .arg("--port")
                .arg(port.to_string());
            run(&mut cmd).await?;

            Ok(())
        }
        cli::Command::Dist { target_triple } => {
            let mut cmd = Command::new("cargo");
            cmd.arg("build")
                .arg("--package")
                .arg(LAUNCHER)
                .arg("--release");
            if let Some(target_triple) = &target_triple {
                cmd.arg("--target").arg(target_triple);
            }
            run(&mut cmd).await?;

            run(&mut trunk_build(true)?).await?;

            let bundle = Path::new(BUNDLE_DIR);
            tokio::fs::create_dir_all(bundle).await?;
            let binary = launcher_binary(target_triple.as_deref());
            let file_name = binary.file_name().ok_or("launcher path has no file name")?;
            tokio::fs::copy(&binary, bundle.join(file_name)).await?;
            copy_dir(Path::new("frontend/dist"), &bundle.join("dist")).await?;

            println!("Bundle written to {}", bundle.display());
            Ok(())
        }
    }
}
