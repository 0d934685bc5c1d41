use std::time::Duration;

use serde::Serialize;

use shopfront_catalog::{CacheOptions, CatalogReader, JsonFileStore};
use shopfront_core::config::{AppConfig, LoadOptions};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum CheckStatus {
    Pass,
    Fail,
    Skipped,
}

#[derive(Debug, Serialize)]
struct DoctorCheck {
    name: &'static str,
    status: CheckStatus,
    details: String,
}

#[derive(Debug, Serialize)]
struct DoctorReport {
    overall_status: CheckStatus,
    summary: String,
    checks: Vec<DoctorCheck>,
}

pub fn run(json_output: bool) -> String {
    let report = build_report();

    if json_output {
        return serde_json::to_string_pretty(&report).unwrap_or_else(|error| {
            format!(
                "{{\"overall_status\":\"fail\",\"summary\":\"doctor serialization failed\",\"error\":\"{}\"}}",
                escape_json(&error.to_string())
            )
        });
    }

    render_human(&report)
}

fn build_report() -> DoctorReport {
    let mut checks = Vec::new();

    match AppConfig::load(LoadOptions::default()) {
        Ok(config) => {
            checks.push(DoctorCheck {
                name: "config_validation",
                status: CheckStatus::Pass,
                details: "configuration loaded and validated".to_string(),
            });
            checks.extend(catalog_checks(&config));
        }
        Err(error) => {
            checks.push(DoctorCheck {
                name: "config_validation",
                status: CheckStatus::Fail,
                details: error.to_string(),
            });
            checks.push(skipped("storage_readability", "configuration did not load"));
            checks.push(skipped("featured_product", "configuration did not load"));
            checks.push(skipped("best_seller_coverage", "configuration did not load"));
        }
    }

    let all_pass = checks.iter().all(|check| check.status == CheckStatus::Pass);
    let overall_status = if all_pass { CheckStatus::Pass } else { CheckStatus::Fail };
    let summary = if all_pass {
        "doctor: all readiness checks passed".to_string()
    } else {
        "doctor: one or more readiness checks failed".to_string()
    };

    DoctorReport { overall_status, summary, checks }
}

fn catalog_checks(config: &AppConfig) -> Vec<DoctorCheck> {
    let runtime = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(error) => {
            return vec![
                DoctorCheck {
                    name: "storage_readability",
                    status: CheckStatus::Fail,
                    details: format!("failed to initialize async runtime: {error}"),
                },
                skipped("featured_product", "storage was not read"),
                skipped("best_seller_coverage", "storage was not read"),
            ];
        }
    };

    let reader = CatalogReader::new(
        JsonFileStore::new(config.catalog.db_path.clone()),
        CacheOptions {
            ttl: Duration::from_secs(config.catalog.cache_ttl_secs),
            tags: config.catalog.cache_tags.clone(),
        },
    );

    let products = match runtime.block_on(reader.fetch_all()) {
        Ok(products) => products,
        Err(error) => {
            return vec![
                DoctorCheck {
                    name: "storage_readability",
                    status: CheckStatus::Fail,
                    details: error.to_string(),
                },
                skipped("featured_product", "storage was not read"),
                skipped("best_seller_coverage", "storage was not read"),
            ];
        }
    };

    let mut checks = vec![DoctorCheck {
        name: "storage_readability",
        status: CheckStatus::Pass,
        details: format!(
            "read {} products from `{}`",
            products.len(),
            config.catalog.db_path.display()
        ),
    }];

    checks.push(match products.iter().find(|product| product.is_featured) {
        Some(product) => DoctorCheck {
            name: "featured_product",
            status: CheckStatus::Pass,
            details: format!("featured product is `{}`", product.id),
        },
        None => DoctorCheck {
            name: "featured_product",
            status: CheckStatus::Fail,
            details: "no product is flagged as featured".to_string(),
        },
    });

    let best_seller_count = products.iter().filter(|product| product.is_best_seller).count();
    checks.push(if best_seller_count > 0 {
        DoctorCheck {
            name: "best_seller_coverage",
            status: CheckStatus::Pass,
            details: format!("{best_seller_count} products flagged as best sellers"),
        }
    } else {
        DoctorCheck {
            name: "best_seller_coverage",
            status: CheckStatus::Fail,
            details: "no product is flagged as a best seller".to_string(),
        }
    });

    checks
}

fn skipped(name: &'static str, reason: &str) -> DoctorCheck {
    DoctorCheck {
        name,
        status: CheckStatus::Skipped,
        details: format!("skipped because {reason}"),
    }
}

fn render_human(report: &DoctorReport) -> String {
    let mut lines = Vec::new();
    lines.push(report.summary.clone());

    for check in &report.checks {
        let marker = match check.status {
            CheckStatus::Pass => "ok",
            CheckStatus::Fail => "fail",
            CheckStatus::Skipped => "skip",
        };
        lines.push(format!("- [{marker}] {}: {}", check.name, check.details));
    }

    lines.join("\n")
}

fn escape_json(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
