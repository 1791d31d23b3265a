//! Turns a [`Configuration`] into the request URL for the image endpoint.
//!
//! The builder is a pure function: the same settings and configuration
//! always produce the same URL, and nothing is fetched or cached here.

use url::Url;

use crate::config::Settings;
use crate::configuration::Configuration;
use crate::error::{PromptpixError, Result};

/// Builds `<endpoint>/prompt/<prompt>?width=..&height=..&model=..&quality=..`
/// with the optional parameters appended only when they apply.
///
/// Option groups hidden by the configured variant are left out.
pub fn build_request_url(settings: &Settings, config: &Configuration) -> Result<Url> {
    let config = settings.variant.restrict(config.clone());

    let no_path =
        || PromptpixError::InvalidEndpoint(format!("{} can't carry a path", settings.endpoint));

    let mut url = settings.endpoint.clone();
    url.set_query(None);
    url.set_fragment(None);
    url.path_segments_mut()
        .map_err(|()| no_path())?
        .pop_if_empty()
        .push("prompt");

    // dot segments are dropped by `push`, which would leave the prompt out
    let before = url.path_segments().map_or(0, Iterator::count);
    url.path_segments_mut()
        .map_err(|()| no_path())?
        .push(&config.prompt);
    if url.path_segments().map_or(0, Iterator::count) != before + 1 {
        return Err(PromptpixError::InvalidPrompt(config.prompt.clone()));
    }

    let (width, height) = config.aspect_ratio.dimensions();
    {
        let mut query = url.query_pairs_mut();
        query
            .append_pair("width", &width.to_string())
            .append_pair("height", &height.to_string())
            .append_pair("model", config.model.as_str())
            .append_pair("quality", config.quality.as_str());

        if let Some(seed) = config.seed {
            query.append_pair("seed", &seed.to_string());
        }
        if config.enhance {
            query.append_pair("enhance", "true");
        }
        if !config.style.is_default() {
            query.append_pair("style", config.style.as_str());
        }

        query.append_pair("nologo", "true");

        if !config.color_palette.is_default() {
            query.append_pair("palette", config.color_palette.as_str());
        }
        if !config.composition.is_default() {
            query.append_pair("composition", config.composition.as_str());
        }
        if !config.lighting.is_default() {
            query.append_pair("lighting", config.lighting.as_str());
        }
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TEST_ENDPOINT;
    use crate::options::{AspectRatio, ColorPalette, Composition, Lighting, Model, Quality, Style};
    use crate::variant::Variant;

    fn settings() -> Settings {
        Settings::new()
            .with_endpoint(TEST_ENDPOINT)
            .expect("test endpoint")
    }

    fn query_keys(url: &Url) -> Vec<String> {
        url.query_pairs().map(|(key, _)| key.into_owned()).collect()
    }

    #[test]
    fn red_fox_scenario() {
        let config = Configuration {
            model: Model::Flux,
            aspect_ratio: AspectRatio::Landscape,
            quality: Quality::Hd,
            seed: None,
            enhance: true,
            ..Configuration::new("a red fox")
        };
        let url = build_request_url(&settings(), &config).expect("build url");
        let url = url.as_str();

        assert!(url.starts_with("https://images.example.org/prompt/a%20red%20fox?"));
        assert!(url.contains("width=1024&height=576&model=flux&quality=hd&enhance=true&nologo=true"));
        for absent in ["seed=", "style=", "palette=", "composition=", "lighting="] {
            assert!(!url.contains(absent), "{absent} should not be in {url}");
        }
        assert!(!url.ends_with('&'));
    }

    #[test]
    fn builder_is_deterministic() {
        let config = Configuration {
            seed: Some(7),
            style: Style::Anime,
            lighting: Lighting::NeonGlow,
            ..Configuration::new("same input, same output")
        };
        let first = build_request_url(&settings(), &config).expect("first");
        let second = build_request_url(&settings(), &config).expect("second");
        assert_eq!(first.as_str(), second.as_str());
    }

    #[test]
    fn optional_parameters_follow_their_guards() {
        let bare = Configuration {
            enhance: false,
            ..Configuration::new("bare")
        };
        let url = build_request_url(&settings(), &bare).expect("bare");
        assert_eq!(
            query_keys(&url),
            vec!["width", "height", "model", "quality", "nologo"]
        );

        let full = Configuration {
            seed: Some(123),
            style: Style::Cartoon,
            color_palette: ColorPalette::Pastel,
            composition: Composition::CloseUp,
            lighting: Lighting::Hdr,
            ..Configuration::new("full")
        };
        let url = build_request_url(&settings(), &full).expect("full");
        assert_eq!(
            query_keys(&url),
            vec![
                "width",
                "height",
                "model",
                "quality",
                "seed",
                "enhance",
                "style",
                "nologo",
                "palette",
                "composition",
                "lighting",
            ]
        );
        assert!(url.as_str().contains("seed=123"));
        assert!(url.as_str().contains("composition=close-up"));
    }

    #[test]
    fn seed_zero_is_still_sent() {
        let config = Configuration {
            seed: Some(0),
            ..Configuration::new("zero")
        };
        let url = build_request_url(&settings(), &config).expect("build url");
        assert!(url.as_str().contains("seed=0"));
    }

    #[test]
    fn prompt_is_a_single_path_segment() {
        let config = Configuration::new("cats/dogs? #1 & more");
        let url = build_request_url(&settings(), &config).expect("build url");
        let segments: Vec<&str> = url.path_segments().expect("segments").collect();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0], "prompt");
        assert!(!segments[1].contains('/'));
        assert!(!segments[1].contains('?'));
        assert!(!segments[1].contains('#'));
    }

    #[test]
    fn dot_segment_prompts_are_refused() {
        for prompt in [".", ".."] {
            let err = build_request_url(&settings(), &Configuration::new(prompt))
                .expect_err("prompt would vanish from the path");
            assert!(matches!(err, PromptpixError::InvalidPrompt(p) if p == prompt));
        }

        let url = build_request_url(&settings(), &Configuration::new("...")).expect("build url");
        assert_eq!(url.path(), "/prompt/...");
    }

    #[test]
    fn endpoint_path_and_query_are_respected() {
        let settings = Settings::new()
            .with_endpoint("http://localhost:9000/api/?stale=1")
            .expect("endpoint");
        let url = build_request_url(&settings, &Configuration::new("x")).expect("build url");
        assert_eq!(url.path(), "/api/prompt/x");
        assert!(!url.as_str().contains("stale"));
    }

    #[test]
    fn hidden_groups_are_not_sent() {
        let settings = settings().with_variant(Variant::Minimal);
        let config = Configuration {
            style: Style::Anime,
            color_palette: ColorPalette::Rgb,
            ..Configuration::new("restricted")
        };
        let url = build_request_url(&settings, &config).expect("build url");
        assert!(!url.as_str().contains("style="));
        assert!(!url.as_str().contains("palette="));
    }
}
