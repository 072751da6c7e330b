//! Bundled content: fallback profile, builtin blog posts, builtin
//! certifications.
//!
//! This is the static data the site builds from when no backend is
//! configured, and the safety net that keeps the site navigable when the
//! live profile fetch fails.

use crate::api::{BlogPost, Certification, Profile};

/// Returns the hardcoded fallback profile.
///
/// Mirrors the live profile's header fields; nested sequences stay empty.
/// The fallback exists to keep the site navigable when the API is
/// unreachable, not to duplicate the backend content.
pub fn fallback_profile() -> Profile {
    Profile {
        name: "Anil Kumar Ravuri".to_string(),
        title: "Sr. IT Systems Engineer".to_string(),
        tagline: "IBM DataPower & API Connect Specialist".to_string(),
        bio: vec![
            "Senior IT Systems Engineer with 7+ years of hands-on expertise in IBM DataPower Gateways and IBM API Connect.".to_string(),
            "Specializing in designing, securing, and optimizing enterprise API infrastructure at scale.".to_string(),
            "Currently leading API platform engineering at Florida Blue (BCBS Florida).".to_string(),
        ],
        email: "anilkumar80459@gmail.com".to_string(),
        phone: "(510) 298-7126".to_string(),
        location: "Jacksonville, FL".to_string(),
        available: true,
        skills: vec![],
        experience: vec![],
        education: vec![],
    }
}

/// Returns the builtin blog posts with full bodies.
///
/// Serves the blog when no API base URL is configured. Listing callers
/// strip the bodies; slug lookup returns the full record.
pub fn builtin_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            slug: "datapower-oauth2-guide".to_string(),
            title: "Implementing OAuth 2.0 on IBM DataPower Gateway".to_string(),
            excerpt: "A practical guide to configuring OAuth 2.0 provider on IBM DataPower Gateway for enterprise API security.".to_string(),
            content: [
                "OAuth 2.0 has become the industry standard for API authorization. In this post, I walk through the end-to-end setup of an OAuth 2.0 provider on IBM DataPower Gateway.",
                "The first step is to create an API Security definition in your DataPower domain. This involves configuring the token endpoint, authorization endpoint, and the supported grant types. For most enterprise use cases, you will want to support both authorization code and client credentials grant types.",
                "Next, configure the AAA (Authentication, Authorization, and Auditing) policy. The AAA policy defines how DataPower validates client credentials, authenticates resource owners, and issues tokens. You can integrate with LDAP directories, custom databases, or external identity providers.",
                "Token management is critical. Configure token lifetimes, refresh token policies, and token revocation endpoints. DataPower supports both opaque tokens and JWT tokens, with JWT being preferred for microservices architectures where token validation needs to happen without calling back to the authorization server.",
                "Finally, test your configuration using tools like Postman or curl. Verify that tokens are issued correctly, that scopes are enforced, and that token expiration and refresh work as expected.",
            ]
            .join("\n\n"),
            date: "2024-12-15".to_string(),
            category: "Security".to_string(),
            tags: vec![
                "DataPower".to_string(),
                "OAuth".to_string(),
                "Security".to_string(),
                "API".to_string(),
            ],
            read_time: 8,
        },
        BlogPost {
            slug: "api-connect-v10-migration".to_string(),
            title: "Migrating from API Connect v5 to v10: Lessons Learned".to_string(),
            excerpt: "Key insights and strategies from migrating enterprise APIs across major API Connect versions.".to_string(),
            content: [
                "Migrating between major versions of IBM API Connect is a significant undertaking that requires careful planning and execution. Having led the migration from v5 to v10 at Florida Blue, here are the lessons I learned.",
                "Start with a thorough inventory of your existing APIs. Document every API product, plan, subscription, and consumer organization. API Connect v10 changes how products and plans are structured, so understanding your current state is essential.",
                "The gateway runtime changed significantly between v5 and v10. If you have custom gateway extensions or DataPower policies, they will need to be reviewed and potentially rewritten. GatewayScript policies generally port well, but XSLT policies may need updates due to changes in the context variables.",
                "Testing is paramount. Set up a parallel environment running v10 alongside your existing v5 environment. Migrate APIs in phases, starting with low-risk, internal APIs before moving to customer-facing ones. Use API testing frameworks to validate that responses match between the old and new environments.",
                "Don't underestimate the impact on your CI/CD pipeline. The apic CLI toolkit changed significantly in v10, and your deployment scripts will need updates.",
            ]
            .join("\n\n"),
            date: "2024-10-20".to_string(),
            category: "Migration".to_string(),
            tags: vec![
                "API Connect".to_string(),
                "Migration".to_string(),
                "Enterprise".to_string(),
            ],
            read_time: 10,
        },
        BlogPost {
            slug: "mutual-tls-datapower".to_string(),
            title: "Securing APIs with Mutual TLS on DataPower".to_string(),
            excerpt: "How to implement certificate-based mutual authentication for zero-trust API security.".to_string(),
            content: [
                "Mutual TLS (mTLS) provides the strongest form of transport-level security for APIs. Unlike standard TLS where only the server presents a certificate, mTLS requires both the client and server to authenticate via certificates.",
                "On IBM DataPower, implementing mTLS involves configuring the SSL/TLS profile to require client certificates. Create a Crypto Validation Credential that specifies which Certificate Authorities are trusted for client certificate validation.",
                "The key challenge in enterprise environments is certificate lifecycle management. Certificates expire, get revoked, and need rotation. Implement certificate monitoring and alerting so that expiring certificates are caught before they cause outages.",
                "DataPower can extract information from client certificates and use it for authorization decisions. For example, you can extract the Common Name (CN) or Subject Alternative Name (SAN) and use it to determine which APIs the client is authorized to access.",
                "Combining mTLS with OAuth 2.0 provides defense in depth. Use mTLS for transport security and OAuth for application-level authorization.",
            ]
            .join("\n\n"),
            date: "2024-08-05".to_string(),
            category: "Security".to_string(),
            tags: vec![
                "Security".to_string(),
                "TLS".to_string(),
                "DataPower".to_string(),
                "Zero Trust".to_string(),
            ],
            read_time: 7,
        },
    ]
}

/// Returns the builtin certifications.
pub fn builtin_certifications() -> Vec<Certification> {
    vec![
        Certification {
            id: "cert1".to_string(),
            name: "IBM Certified System Administrator - DataPower Gateway v7.5".to_string(),
            issuer: "IBM".to_string(),
            date: "2019".to_string(),
            credential_id: None,
            credential_url: None,
        },
        Certification {
            id: "cert2".to_string(),
            name: "IBM Certified Solution Advisor - API Connect v10".to_string(),
            issuer: "IBM".to_string(),
            date: "2022".to_string(),
            credential_id: None,
            credential_url: None,
        },
        Certification {
            id: "cert3".to_string(),
            name: "AWS Certified Cloud Practitioner".to_string(),
            issuer: "Amazon Web Services".to_string(),
            date: "2023".to_string(),
            credential_id: None,
            credential_url: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_profile_sequences_empty_never_absent() {
        // Arrange & Act
        let profile = fallback_profile();

        // Assert
        assert!(!profile.name.is_empty());
        assert!(!profile.bio.is_empty(), "Fallback keeps the bio paragraphs");
        assert!(profile.skills.is_empty());
        assert!(profile.experience.is_empty());
        assert!(profile.education.is_empty());
    }

    #[test]
    fn test_builtin_posts_have_unique_slugs_and_bodies() {
        // Arrange & Act
        let posts = builtin_posts();

        // Assert
        assert_eq!(posts.len(), 3);
        let mut slugs: Vec<&str> = posts.iter().map(|p| p.slug.as_str()).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), 3, "Slugs must be unique");
        assert!(posts.iter().all(|p| !p.content.is_empty()));
        assert!(posts.iter().all(|p| !p.category.is_empty()));
    }

    #[test]
    fn test_builtin_certifications_present() {
        // Arrange & Act
        let certs = builtin_certifications();

        // Assert
        assert_eq!(certs.len(), 3);
        assert!(certs.iter().all(|c| !c.id.is_empty() && !c.name.is_empty()));
    }
}
