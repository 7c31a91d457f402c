use gogger::Logger;
use tracing::{debug, info};

mod args;
mod log;

fn main() -> anyhow::Result<()> {
    let args = args::parse();

    log::init(log::level_from_verbosity(args.verbosity));

    let mut logger = Logger::new(&args.project, args.time_pattern(), args.color);
    logger.set_level(args.level)?;
    debug!(
        "project={} level={} pattern={:?} color={}",
        logger.project_name,
        logger.level(),
        logger.time_format,
        logger.colorful
    );

    let message = args.message();
    if !logger.log(args.severity, &message) {
        info!(
            "{} message below level {}; nothing printed",
            args.severity,
            logger.level()
        );
    }

    Ok(())
}
