use serde::Deserialize;
use yew::prelude::*;

use crate::components::price_display::{PriceDisplay, PriceSize};
use crate::components::reveal::{report_config_error, Reveal};
use crate::error::MotionError;
use crate::motion::reveal::RevealConfig;

// Package data ships as JSON so pricing can change without touching markup.
const PACKAGES_JSON: &str = r#"[
    {
        "name": "Starter",
        "tagline": "Try out practice tests",
        "price": 49000,
        "period": "month",
        "features": ["5 full try-outs", "Answer explanations", "Score history"],
        "reveal": { "variant": "fadeInUp", "delay": 0.0 }
    },
    {
        "name": "Pro",
        "tagline": "Everything for exam season",
        "price": 199000,
        "period": "month",
        "highlighted": true,
        "features": ["Unlimited try-outs", "Video lessons", "National ranking", "Study planner"],
        "reveal": { "variant": "scaleIn", "delay": 0.1 }
    },
    {
        "name": "Intensive",
        "tagline": "Guided prep with mentors",
        "price": 499000,
        "period": "month",
        "features": ["Everything in Pro", "Weekly mentor sessions", "Personal study plan"],
        "reveal": { "variant": "fadeInUp", "delay": 0.2 }
    }
]"#;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Package {
    pub name: String,
    pub tagline: String,
    pub price: f64,
    pub period: Option<String>,
    #[serde(default)]
    pub highlighted: bool,
    pub features: Vec<String>,
    #[serde(default)]
    pub reveal: RevealConfig,
}

pub fn parse_packages(json: &str) -> Result<Vec<Package>, MotionError> {
    serde_json::from_str(json).map_err(|err| MotionError::InvalidConfig {
        field: "packages",
        reason: err.to_string(),
    })
}

fn load_packages() -> Vec<Package> {
    parse_packages(PACKAGES_JSON).unwrap_or_else(|err| {
        report_config_error(&err);
        Vec::new()
    })
}

#[derive(Properties, PartialEq)]
struct PackageCardProps {
    package: Package,
}

#[function_component(PackageCard)]
fn package_card(props: &PackageCardProps) -> Html {
    let package = &props.package;
    html! {
        <Reveal config={package.reveal.clone()} class={classes!("package-card", package.highlighted.then(|| "highlighted"))}>
            if package.highlighted {
                <span class="package-badge">{"Most popular"}</span>
            }
            <h3>{ &package.name }</h3>
            <p class="package-tagline">{ &package.tagline }</p>
            <PriceDisplay
                amount={package.price}
                period={package.period.clone().map(AttrValue::from)}
                size={PriceSize::Large}
            />
            <ul class="package-features">
                { for package.features.iter().map(|feature| html! { <li>{ feature }</li> }) }
            </ul>
            <a href="#register" class="package-cta">{"Choose "}{ &package.name }</a>
        </Reveal>
    }
}

#[function_component(PackagesSection)]
pub fn packages_section() -> Html {
    let packages = use_memo(|_| load_packages(), ());

    html! {
        <section id="packages" class="packages-section">
            <Reveal>
                <h2>{"Pick your package"}</h2>
                <p class="section-subtitle">{"Prices in Rupiah, cancel any time."}</p>
            </Reveal>
            <div class="packages-grid">
                { for packages.iter().map(|package| html! {
                    <PackageCard key={package.name.clone()} package={package.clone()} />
                }) }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::variant::Variant;

    #[test]
    fn bundled_packages_parse() {
        let packages = parse_packages(PACKAGES_JSON).unwrap();
        assert_eq!(packages.len(), 3);
        assert_eq!(packages[1].price, 199_000.0);
        assert!(packages[1].highlighted);
        assert_eq!(packages[1].reveal.variant, Variant::Scale);
        assert!(packages.iter().all(|package| package.reveal.validate().is_ok()));
    }

    #[test]
    fn unknown_variant_in_package_data_is_reported() {
        let json = r#"[{"name":"X","tagline":"","price":1,"features":[],"reveal":{"variant":"wobble"}}]"#;
        let err = parse_packages(json).unwrap_err();
        assert!(matches!(err, MotionError::InvalidConfig { field: "packages", .. }));
        assert!(err.to_string().contains("wobble"));
    }
}
