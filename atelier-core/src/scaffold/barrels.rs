//! Barrel file generation
//!
//! Three tiers of generated re-export files: one per component directory,
//! one per populated layer, and a single root barrel. Virtual names are
//! always routed to their host's path; no path is ever generated under a
//! virtual component's own (nonexistent) directory.

use crate::catalog::layer_dir;

pub(crate) const GENERATED_HEADER: &str = "// Generated by atelier. Do not edit by hand.\n";

/// One export line in a layer barrel.
pub(crate) enum LayerMember {
    Concrete {
        name: String,
    },
    Virtual {
        name: String,
        host: String,
        host_layer: u8,
    },
}

/// Barrel for a component's own directory: the component itself plus any
/// virtual names its source file hosts.
pub(crate) fn component_barrel(name: &str, hosted: &[String]) -> String {
    let mut names: Vec<&str> = Vec::with_capacity(1 + hosted.len());
    names.push(name);
    names.extend(hosted.iter().map(String::as_str));

    format!(
        "{GENERATED_HEADER}export {{ {} }} from \"./{name}\";\n",
        names.join(", ")
    )
}

/// Barrel for one layer directory. Members arrive sorted by name.
pub(crate) fn layer_barrel(layer: u8, members: &[LayerMember]) -> String {
    let mut out = String::from(GENERATED_HEADER);
    for member in members {
        match member {
            LayerMember::Concrete { name } => {
                out.push_str(&format!("export {{ {name} }} from \"./{name}\";\n"));
            }
            LayerMember::Virtual {
                name,
                host,
                host_layer,
            } => {
                let host_path = if *host_layer == layer {
                    format!("./{host}")
                } else {
                    format!("../{}/{host}", layer_dir(*host_layer))
                };
                out.push_str(&format!("export {{ {name} }} from \"{host_path}\";\n"));
            }
        }
    }
    out
}

/// Root barrel re-exporting every populated layer, highest layer first.
pub(crate) fn root_barrel(layers_desc: &[u8]) -> String {
    let mut out = String::from(GENERATED_HEADER);
    for &layer in layers_desc {
        out.push_str(&format!("export * from \"./{}\";\n", layer_dir(layer)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn component_barrel_exports_host_and_virtual_names() {
        let barrel = component_barrel("Card", &["CardFooter".to_string(), "CardHeader".to_string()]);
        assert_eq!(
            barrel,
            "// Generated by atelier. Do not edit by hand.\n\
             export { Card, CardFooter, CardHeader } from \"./Card\";\n"
        );
    }

    #[test]
    fn layer_barrel_routes_virtual_names_to_the_host() {
        let members = vec![
            LayerMember::Concrete {
                name: "Card".to_string(),
            },
            LayerMember::Virtual {
                name: "CardHeader".to_string(),
                host: "Card".to_string(),
                host_layer: 3,
            },
            LayerMember::Virtual {
                name: "TableRow".to_string(),
                host: "DataTable".to_string(),
                host_layer: 4,
            },
        ];
        let barrel = layer_barrel(3, &members);

        assert!(barrel.contains("export { Card } from \"./Card\";"));
        assert!(barrel.contains("export { CardHeader } from \"./Card\";"));
        assert!(barrel.contains("export { TableRow } from \"../composites/DataTable\";"));
        // Never a path under the virtual component's own name.
        assert!(!barrel.contains("./CardHeader"));
        assert!(!barrel.contains("./TableRow\""));
    }

    #[test]
    fn root_barrel_orders_layers_high_to_low() {
        let barrel = root_barrel(&[6, 4, 3]);
        let pages = barrel.find("./pages").unwrap();
        let composites = barrel.find("./composites").unwrap();
        let primitives = barrel.find("./primitives").unwrap();
        assert!(pages < composites && composites < primitives);
    }
}
