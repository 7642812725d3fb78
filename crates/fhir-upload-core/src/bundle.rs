use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::resource::Resource;

/// Bundle.type values this tool produces.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum BundleType {
    Transaction,
}

/// HTTP verb of a transaction entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpVerb {
    Put,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BundleRequest {
    pub method: HttpVerb,
    /// Target relative to the server base, `{resourceType}/{id}`.
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BundleEntry {
    pub request: BundleRequest,
    pub resource: Resource,
}

/// A FHIR transaction Bundle: all entries succeed or fail together on the
/// server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Bundle {
    #[serde(rename = "resourceType")]
    resource_type: BundleResourceType,
    #[serde(rename = "type")]
    pub bundle_type: BundleType,
    pub entry: Vec<BundleEntry>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
enum BundleResourceType {
    Bundle,
}

impl Bundle {
    pub fn transaction() -> Self {
        Self {
            resource_type: BundleResourceType::Bundle,
            bundle_type: BundleType::Transaction,
            entry: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entry.is_empty()
    }
}

impl BundleEntry {
    /// Wrap a resource as an update-or-create at its own address.
    ///
    /// Hands the resource back when it lacks `resourceType` or `id`.
    pub fn put(resource: Resource) -> Result<Self, Resource> {
        let Some(url) = resource.reference() else {
            return Err(resource);
        };
        Ok(Self {
            request: BundleRequest {
                method: HttpVerb::Put,
                url,
            },
            resource,
        })
    }
}

/// Combine individual resources into one transaction Bundle.
///
/// Input order is preserved. Resources that cannot be addressed are logged
/// and left out; they never fail the batch.
pub fn bundle_resources(resources: impl IntoIterator<Item = Resource>) -> Bundle {
    let mut bundle = Bundle::transaction();
    let mut skipped = 0usize;

    for resource in resources {
        match BundleEntry::put(resource) {
            Ok(entry) => bundle.entry.push(entry),
            Err(resource) => {
                let missing = if resource.id().is_none() { "ID" } else { "type" };
                warn!("resource {missing} missing; skipping: {}", resource.as_value());
                skipped += 1;
            }
        }
    }

    info!("bundled {} resource(s), skipped {skipped}", bundle.len());
    bundle
}
