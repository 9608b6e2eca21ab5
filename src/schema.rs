//! schema.org structured data for directory pages
//!
//! Pure formatting functions that turn advisor listings and catalog entries
//! into JSON-LD objects for embedding in rendered pages. Optional values that
//! are unknown are omitted rather than emitted as `null`.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::data::{AdvisorRecord, City};

/// Public site root used in every generated URL
pub const SITE_URL: &str = "https://findanadvisor.online";

const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Image used for advisors without one of their own
const DEFAULT_ADVISOR_IMAGE: &str = "https://findanadvisor.online/default-advisor-image.jpg";

/// One step of a breadcrumb trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbItem {
    pub name: String,
    pub url: String,
}

/// A question with its answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

/// A named instruction in a how-to guide
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HowToStep {
    pub name: String,
    pub text: String,
}

/// Metadata of a blog post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub slug: String,
    pub title: String,
    pub description: String,
    /// Author with optional credentials, e.g. "Sarah Mitchell, CFP"
    pub author: String,
    /// Publication date (ISO 8601)
    pub date: String,
    pub category: String,
}

/// ItemList of advisors for an advisor-type/city listing page
pub fn advisor_list_schema(advisors: &[AdvisorRecord], city: &str, advisor_type: &str) -> Value {
    let items: Vec<Value> = advisors
        .iter()
        .enumerate()
        .map(|(index, advisor)| {
            json!({
                "@type": "ListItem",
                "position": index + 1,
                "item": advisor_item(advisor, city, advisor_type),
            })
        })
        .collect();

    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "ItemList",
        "name": format!("{advisor_type} in {city}"),
        "description": format!(
            "Find qualified {} in {city}. Compare ratings, reviews, and expertise.",
            advisor_type.to_lowercase()
        ),
        "numberOfItems": advisors.len(),
        "itemListElement": items,
    })
}

fn advisor_item(advisor: &AdvisorRecord, city: &str, advisor_type: &str) -> Value {
    let url = format!("{SITE_URL}/advisor/{}", advisor.id);

    let mut item = json!({
        "@type": ["LocalBusiness", "FinancialService"],
        "@id": url,
        "name": advisor.title,
        "address": {
            "@type": "PostalAddress",
            "streetAddress": advisor.address,
            "addressLocality": city,
            "addressCountry": "GB",
        },
        "url": url,
        "aggregateRating": {
            "@type": "AggregateRating",
            "ratingValue": advisor.rating,
            "reviewCount": advisor.reviews,
            "bestRating": 5,
            "worstRating": 1,
        },
        "image": DEFAULT_ADVISOR_IMAGE,
        "priceRange": "$$",
        "serviceType": advisor_type,
        "areaServed": {
            "@type": "City",
            "name": city,
        },
        "hasCredential": [],
        "knowsAbout": [],
    });

    if let (Some(phone), Value::Object(fields)) = (&advisor.phone, &mut item) {
        fields.insert("telephone".to_string(), Value::String(phone.clone()));
    }

    item
}

/// WebPage for a city's location page, with its services and breadcrumb
pub fn local_business_schema(city: &City) -> Value {
    let page_url = format!("{SITE_URL}/locations/{}", city.slug);

    let offer = |name: &str, service_type: &str| {
        json!({
            "@type": "Offer",
            "itemOffered": {
                "@type": "Service",
                "name": name,
                "serviceType": service_type,
            },
        })
    };

    let mut breadcrumb = breadcrumb_schema(&[
        BreadcrumbItem {
            name: "Home".to_string(),
            url: SITE_URL.to_string(),
        },
        BreadcrumbItem {
            name: "Locations".to_string(),
            url: format!("{SITE_URL}/locations"),
        },
        BreadcrumbItem {
            name: city.name.to_string(),
            url: page_url.clone(),
        },
    ]);
    if let Value::Object(fields) = &mut breadcrumb {
        fields.remove("@context");
    }

    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "WebPage",
        "name": format!("Financial Advisors in {}", city.name),
        "description": format!(
            "Find qualified financial advisors, mortgage specialists, and wealth managers in {}, {}.",
            city.name, city.county
        ),
        "url": page_url,
        "mainEntity": {
            "@type": "City",
            "name": city.name,
            "containedInPlace": {
                "@type": "AdministrativeArea",
                "name": city.county,
            },
            "hasOfferCatalog": {
                "@type": "OfferCatalog",
                "name": "Financial Services",
                "itemListElement": [
                    offer("Financial Planning", "Financial Advisory"),
                    offer("Mortgage Advice", "Mortgage Advisory"),
                    offer("Pension Planning", "Pension Advisory"),
                ],
            },
        },
        "breadcrumb": breadcrumb,
    })
}

/// BreadcrumbList with 1-based positions
pub fn breadcrumb_schema(items: &[BreadcrumbItem]) -> Value {
    let elements: Vec<Value> = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            json!({
                "@type": "ListItem",
                "position": index + 1,
                "name": item.name,
                "item": item.url,
            })
        })
        .collect();

    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "BreadcrumbList",
        "itemListElement": elements,
    })
}

/// BlogPosting for an article page
pub fn blog_post_schema(post: &BlogPost) -> Value {
    let author_name = post.author.split(',').next().unwrap_or_default().trim();
    let job_title = if post.author.contains("CFP") {
        "Certified Financial Planner"
    } else {
        "Financial Advisor"
    };

    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "BlogPosting",
        "headline": post.title,
        "description": post.description,
        "image": format!("{SITE_URL}/blog-images/{}.jpg", post.slug),
        "author": {
            "@type": "Person",
            "name": author_name,
            "jobTitle": job_title,
            "knowsAbout": [post.category, "Financial Planning", "UK Finance"],
        },
        "publisher": publisher(),
        "datePublished": post.date,
        "dateModified": post.date,
        "mainEntityOfPage": {
            "@type": "WebPage",
            "@id": format!("{SITE_URL}/blog/{}", post.slug),
        },
        "articleSection": post.category,
        "keywords": [post.category, "financial advice", "UK finance", "financial planning"],
        "about": {
            "@type": "Thing",
            "name": post.category,
        },
        "audience": {
            "@type": "Audience",
            "audienceType": "UK residents seeking financial advice",
        },
        "inLanguage": "en-GB",
        "isAccessibleForFree": true,
    })
}

fn publisher() -> Value {
    json!({
        "@type": "Organization",
        "name": "FindAnAdvisor",
        "logo": {
            "@type": "ImageObject",
            "url": format!("{SITE_URL}/logo.png"),
        },
    })
}

/// FAQPage from question/answer pairs
pub fn faq_schema(faqs: &[FaqEntry]) -> Value {
    let questions: Vec<Value> = faqs
        .iter()
        .map(|faq| {
            json!({
                "@type": "Question",
                "name": faq.question,
                "acceptedAnswer": {
                    "@type": "Answer",
                    "text": faq.answer,
                },
            })
        })
        .collect();

    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "FAQPage",
        "mainEntity": questions,
    })
}

/// HowTo for a guide; step URLs are in-page anchors `#step-N`
pub fn how_to_schema(title: &str, steps: &[HowToStep]) -> Value {
    let step_values: Vec<Value> = steps
        .iter()
        .enumerate()
        .map(|(index, step)| {
            let position = index + 1;
            json!({
                "@type": "HowToStep",
                "position": position,
                "name": step.name,
                "text": step.text,
                "url": format!("#step-{position}"),
            })
        })
        .collect();

    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "HowTo",
        "name": title,
        "description": format!("Step-by-step guide: {title}"),
        "image": format!("{SITE_URL}/how-to-guide.jpg"),
        "totalTime": "PT30M",
        "supply": [
            { "@type": "HowToSupply", "name": "Financial documents" },
            { "@type": "HowToSupply", "name": "Income statements" },
        ],
        "step": step_values,
    })
}

/// Organization record for the site itself
pub fn organization_schema() -> Value {
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "Organization",
        "name": "FindAnAdvisor",
        "url": SITE_URL,
        "logo": format!("{SITE_URL}/logo.png"),
        "sameAs": [
            "https://twitter.com/findanadvisor",
            "https://facebook.com/findanadvisor",
            "https://linkedin.com/company/findanadvisor",
        ],
        "contactPoint": {
            "@type": "ContactPoint",
            "telephone": "+44-123-456-7890",
            "contactType": "customer service",
            "email": "info@findanadvisor.online",
            "availableLanguage": "English",
        },
    })
}
