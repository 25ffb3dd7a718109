use std::process::Command;
use std::str;

fn main() {
	println!("cargo:rerun-if-changed=crates/core");
	println!("cargo:rerun-if-changed=src");
	println!("cargo:rerun-if-changed=build.rs");
	println!("cargo:rerun-if-changed=Cargo.toml");
	if let Some(time) = Command::new("date").args(["-u", "+%Y-%m-%dT%H:%M:%SZ"]).output_string() {
		println!("cargo:rustc-env=ABACUS_BUILD_TIME={time}");
	}
	if let Some(tag) = git().args(["describe", "--tags", "--abbrev=0"]).output_string() {
		println!("cargo:rustc-env=ABACUS_GIT_TAG={tag}");
	}
	if let Some(rev) = git().args(["rev-parse", "--short", "HEAD"]).output_string() {
		println!("cargo:rustc-env=ABACUS_GIT_HASH={rev}");
	}
}

fn git() -> Command {
	Command::new("git")
}

trait CommandExt {
	fn output_string(&mut self) -> Option<String>;
}

impl CommandExt for Command {
	fn output_string(&mut self) -> Option<String> {
		self.output()
			.ok()
			.filter(|output| output.status.success())
			.and_then(|output| {
				str::from_utf8(&output.stdout).ok().map(|output| output.trim().to_string())
			})
			.filter(|output| !output.is_empty())
	}
}
