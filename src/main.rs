use objekt_gacha::{
    config::Config,
    error::AppError,
    gacha::Gacha,
    model::banner::Banner,
    service::{chase::ChaseService, objekt::ObjektService, spin::SpinService},
    startup,
    util::parse::parse_u64_from_string,
};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: objekt-gacha [spin <user_id> [banner] | chase <user_id> <slug> | unchase <user_id> | status <user_id>]";

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    if let Some(path) = &config.catalog_seed_path {
        startup::seed_catalog(&db, path).await?;
    }

    let gacha = Gacha::new(config.load_gacha_config()?)?;

    tracing::info!(
        objekts = ObjektService::new(&db).count().await?,
        general_ceiling = gacha.config().pity.general_ceiling,
        chase_ceiling = gacha.config().pity.chase_ceiling,
        "Gacha engine ready"
    );

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    let result = match args.as_slice() {
        [] => return Ok(()),
        ["spin", user_id, rest @ ..] => {
            let user_id = parse_u64_from_string(user_id.to_string())?;
            let banner = rest.first().map(|b| Banner::parse(b));

            SpinService::new(&db, &gacha)
                .draw(user_id, banner.as_ref())
                .await
                .map(|spin| {
                    println!(
                        "{} ({}) x{} | +{} como, balance {} | pity {}/{}",
                        spin.objekt.display_name(),
                        spin.objekt.rarity_name(),
                        spin.copies,
                        spin.como_reward,
                        spin.balance,
                        spin.pity.pity_count,
                        gacha.config().pity.general_ceiling,
                    );
                    if spin.source.is_pity() {
                        println!(
                            "Pity ({:?}) after {} draws",
                            spin.source,
                            spin.pity_taken.unwrap_or_default()
                        );
                    }
                })
        }
        ["chase", user_id, slug] => {
            let user_id = parse_u64_from_string(user_id.to_string())?;

            ChaseService::new(&db, &gacha)
                .set_chase(user_id, slug)
                .await
                .map(|change| match change.previous_slug {
                    Some(previous) => println!(
                        "Now chasing {} (replaced {})",
                        change.objekt.display_name(),
                        previous
                    ),
                    None => println!("Now chasing {}", change.objekt.display_name()),
                })
        }
        ["unchase", user_id] => {
            let user_id = parse_u64_from_string(user_id.to_string())?;

            ChaseService::new(&db, &gacha)
                .clear_chase(user_id)
                .await
                .map(|_| println!("Chase cleared"))
        }
        ["status", user_id] => {
            let user_id = parse_u64_from_string(user_id.to_string())?;

            ChaseService::new(&db, &gacha).status(user_id).await.map(|pity| {
                let chase = pity.chase_objekt_slug.as_deref().unwrap_or("none");
                println!(
                    "pity {}/{} | chase {} {}/{}",
                    pity.pity_count,
                    gacha.config().pity.general_ceiling,
                    chase,
                    pity.chase_pity_count,
                    gacha.config().pity.chase_ceiling,
                );
            })
        }
        _ => {
            eprintln!("{}", USAGE);
            return Ok(());
        }
    };

    if let Err(err) = result {
        eprintln!("{}", err.user_message());
    }

    Ok(())
}
