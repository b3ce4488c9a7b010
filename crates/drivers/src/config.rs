use mintprep_domain::{CollectionConfig, HalfTemplate, TraitAttribute};

/// Built-in collection presets. Each preset is the full configuration for
/// one collection run; the generation pipeline itself is preset-agnostic.
pub const PRESET_NAMES: &[&str] = &["ukraine", "toadz"];

pub fn preset(name: &str) -> Option<CollectionConfig> {
    match name {
        "ukraine" => Some(ukraine()),
        "toadz" => Some(toadz()),
        _ => None,
    }
}

fn ukraine() -> CollectionConfig {
    CollectionConfig {
        base_uri: "ipfs://Qmbu82wQt8D3D2B2FMva33uwTvsWVzNvd9p2PPNPXpcg49".to_string(),
        image_extension: "jpg".to_string(),
        primary: HalfTemplate {
            name_prefix: "Ukraine Toad #".to_string(),
            description: "All proceeds from buying this toad go to help the Ukraine. \
                          Anybody can buy the NFT if they offer more money than the \
                          price you bought it for"
                .to_string(),
            trait_attribute: None,
        },
        companion: HalfTemplate {
            name_prefix: "Ukraine Toad POAP #".to_string(),
            description: "This POAP certifies that you once held an Ukrainian toad \
                          and you donated the money to Ukraine."
                .to_string(),
            trait_attribute: None,
        },
    }
}

fn toadz() -> CollectionConfig {
    CollectionConfig {
        base_uri: "ipfs://QmS2SpPstK2JAyDKijYHeHgsFPQeAno8VG9hDDKnHNfmdZ".to_string(),
        image_extension: "jpg".to_string(),
        primary: HalfTemplate {
            name_prefix: "Rescue Toad #".to_string(),
            description: "Rescue Toadz raise funds for humanitarian relief. Anybody \
                          can capture a toad by paying more than its last price."
                .to_string(),
            trait_attribute: Some(TraitAttribute {
                trait_type: "Type".to_string(),
                value: "Toad".to_string(),
            }),
        },
        companion: HalfTemplate {
            name_prefix: "Toad Glasses #".to_string(),
            description: "When a Rescue Toad hops to another wallet it drops its \
                          glasses as a memento for the donation."
                .to_string(),
            trait_attribute: Some(TraitAttribute {
                trait_type: "Type".to_string(),
                value: "Glasses".to_string(),
            }),
        },
    }
}
