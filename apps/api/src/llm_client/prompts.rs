// Shared prompt constants.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Keeps salary and credential figures grounded in the US labour market.
pub const REALISM_INSTRUCTION: &str = "\
    CRITICAL: Salary figures must reflect realistic US market ranges for the stated role \
    and be written as US dollar ranges like \"$55,000 - $65,000\". \
    Credential costs and timelines must be realistic; say \"Varies\" rather than guessing. \
    Do NOT promise outcomes, guaranteed jobs, or specific employers.";
