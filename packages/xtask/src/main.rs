use clap::Parser;
use xtask_base::{
    ci::{StandardVersions, CI},
    cmd, in_workspace, CommonCmds,
};

#[derive(Parser)]
enum Commands {
    /// Build the browser bundle into the site's assets
    Web,
    /// Convert legacy pages in the site checkout
    Jekyllify,
    #[clap(flatten)]
    Common(CommonCmds),
}

fn main() {
    in_workspace(|workspace| {
        type Cmds = Commands;

        match Cmds::parse() {
            Cmds::Web => cmd!("wasm-pack build --target web --out-dir ../../assets/js/navmenu")
                .dir("packages/web")
                .run()?,
            Cmds::Jekyllify => cmd!("cargo run --bin navmenu-jekyllify -- --verbose").run()?,
            Cmds::Common(cmds) => cmds.sub_command::<Cmds>(
                workspace,
                [],
                CI::standard_workflow(
                    StandardVersions {
                        rustc_stable_version: "1.87.0",
                        rustc_nightly_version: "nightly-2025-03-15",
                        udeps_version: "0.1.55",
                    },
                    &[],
                ),
                |_| Ok(()),
            )?,
        }

        Ok(())
    });
}
