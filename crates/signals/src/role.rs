//! Contact role inference.
//!
//! Roles are a label, not a score: they are picked from an ordered rule
//! table after the contact's confidence has been computed. The first rule
//! whose predicate holds wins.

use crate::text::normalize;
use crate::types::ContactRole;

/// Title tokens that mark a senior contact.
pub const SENIOR_TITLE_KEYWORDS: &[&str] = &[
    "manager",
    "director",
    "lead",
    "head",
    "chief",
    "vp",
    "president",
    "principal",
];

/// Highest tier still labelled Program Manager.
pub const PROGRAM_MANAGER_MAX_TIER: u8 = 3;
/// Highest tier still labelled Team Lead.
pub const TEAM_LEAD_MAX_TIER: u8 = 5;

/// Facts about a contact match that role rules look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoleContext {
    /// Contact is affiliated with exactly the job's program.
    pub program_exact: bool,
    /// Contact is affiliated with the job's program, exactly or partially.
    pub program_matched: bool,
    pub location_matched: bool,
    pub company_matched: bool,
    pub tier: u8,
    pub senior_title: bool,
}

/// One entry of [`ROLE_RULES`].
#[derive(Debug, Clone, Copy)]
pub struct RoleRule {
    pub role: ContactRole,
    pub applies: fn(&RoleContext) -> bool,
}

fn hiring_manager(ctx: &RoleContext) -> bool {
    ctx.program_exact && ctx.senior_title
}

fn program_manager(ctx: &RoleContext) -> bool {
    ctx.program_matched && ctx.tier <= PROGRAM_MANAGER_MAX_TIER
}

fn team_lead(ctx: &RoleContext) -> bool {
    ctx.program_matched && ctx.tier <= TEAM_LEAD_MAX_TIER
}

// Untiered program contacts, or someone at the same company and site.
fn team_member(ctx: &RoleContext) -> bool {
    ctx.program_matched || (ctx.location_matched && ctx.company_matched)
}

fn related_contact(_: &RoleContext) -> bool {
    true
}

/// Ordered from most to least specific.
pub const ROLE_RULES: &[RoleRule] = &[
    RoleRule {
        role: ContactRole::HiringManager,
        applies: hiring_manager,
    },
    RoleRule {
        role: ContactRole::ProgramManager,
        applies: program_manager,
    },
    RoleRule {
        role: ContactRole::TeamLead,
        applies: team_lead,
    },
    RoleRule {
        role: ContactRole::TeamMember,
        applies: team_member,
    },
    RoleRule {
        role: ContactRole::RelatedContact,
        applies: related_contact,
    },
];

pub fn infer_role(ctx: &RoleContext) -> ContactRole {
    ROLE_RULES
        .iter()
        .find(|rule| (rule.applies)(ctx))
        .map(|rule| rule.role)
        .unwrap_or(ContactRole::RelatedContact)
}

/// True when the title carries a senior keyword ("Program Manager",
/// "Director of Ops", "Team Lead", "Leadership Coach" all qualify).
pub fn is_senior_title(title: Option<&str>) -> bool {
    let Some(title) = title else {
        return false;
    };
    normalize(title).split(' ').any(|token| {
        SENIOR_TITLE_KEYWORDS
            .iter()
            .any(|kw| token == *kw || (kw.len() >= 4 && token.starts_with(kw)))
    })
}
