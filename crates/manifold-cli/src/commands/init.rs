//! Initialize a new Manifold project

use anyhow::Result;
use std::fs;
use std::path::Path;

/// Run the init command
pub async fn run(path: &str, name: Option<&str>) -> Result<()> {
    let project_dir = Path::new(path);

    // Create directory if it doesn't exist
    if !project_dir.exists() {
        fs::create_dir_all(project_dir)?;
    }

    // Get absolute path for deriving name
    let abs_path = project_dir.canonicalize()?;

    // Derive project name from directory name if not provided
    let project_name = match name {
        Some(n) => n.to_string(),
        None => abs_path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|s| s.to_string())
            .ok_or_else(|| anyhow::anyhow!("Could not determine project name from path"))?,
    };

    // Check if already initialized
    if project_dir.join("manifold.yaml").exists() {
        anyhow::bail!(
            "Directory '{}' already contains a manifold.yaml",
            project_dir.display()
        );
    }

    tracing::info!("Creating new Manifold project: {}", project_name);

    // Create the session directory
    fs::create_dir_all(project_dir.join(".manifold"))?;

    // Create manifold.yaml
    let config = format!(
        r#"# Manifold Project Configuration
name: {project_name}

# Remote configuration gateway
gateway:
  url: "http://localhost:8000"

# Local editing session
session:
  dir: ".manifold"
"#
    );
    fs::write(project_dir.join("manifold.yaml"), config)?;

    // Create .gitignore
    let gitignore = r#"# Manifold local session state
.manifold/

# IDE
.idea/
.vscode/
*.swp
"#;
    fs::write(project_dir.join(".gitignore"), gitignore)?;

    tracing::info!(
        "✓ Created project '{}' at {}",
        project_name,
        abs_path.display()
    );
    tracing::info!("");
    tracing::info!("Next steps:");
    if path != "." {
        tracing::info!("  cd {}", project_dir.display());
    }
    tracing::info!("  manifold source add http <url>   # Describe a source");
    tracing::info!("  manifold commit <name>           # Name the configuration");
    tracing::info!("  manifold sync                    # Push the table to the gateway");

    Ok(())
}
