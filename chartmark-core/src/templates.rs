//! Bundled text templates: the prompt users hand to an LLM, and a sample answer.
//!
//! The sample must stay parseable; `tests/templates_test.rs` enforces that.

/// Instructions for an LLM, asking for output in the format [`crate::parser`] reads.
///
/// The signal lines in here are placeholders (`x=[0-100]`) and intentionally
/// do not parse.
pub const ANALYSIS_PROMPT: &str = r#"Please analyze this candlestick chart and provide buy/sell signals organized in logical groups using this EXACT format:

CANDLESTICK_ANALYSIS:

GROUP: [PHASE_NAME]
PHASE_DESCRIPTION: [Brief description of what's happening in this phase]
BUY_SIGNAL: x=[0-100], y=[0-100], label="[Signal Name]", description="[Technical details]", date="[Time period]"
SELL_SIGNAL: x=[0-100], y=[0-100], label="[Signal Name]", description="[Technical details]", date="[Time period]"
RESISTANCE_LEVEL: x=[0-100], y=[0-100], label="[Level Name]", description="[Technical details]", date="[Time period]"
SUPPORT_LEVEL: x=[0-100], y=[0-100], label="[Level Name]", description="[Technical details]", date="[Time period]"

IMPORTANT INSTRUCTIONS:
• Coordinates: x,y are percentages (0-100) from top-left of image
• x=0 is left edge, x=100 is right edge
• y=0 is top edge, y=100 is bottom edge
• Group similar timeframe signals together
• Typical groups: EARLY_RALLY_PHASE, CONSOLIDATION_PHASE, FAILURE_PHASE, RECOVERY_PHASE, CURRENT_PHASE, VOLUME_CONFIRMATION, BREAKOUT_PHASE, DISTRIBUTION_PHASE
• Look for: breakouts, reversals, support/resistance bounces, volume spikes
• Include 3-6 groups with 2-4 signals each for comprehensive analysis
• Focus on the most significant trading opportunities and key levels

Save your response as a .txt file and upload it to the analyzer."#;

/// A complete multi-group analysis of a daily chart, in the expected format.
pub const EXAMPLE_ANALYSIS: &str = r#"CANDLESTICK_ANALYSIS:

GROUP: EARLY_RALLY_PHASE
PHASE_DESCRIPTION: Initial uptrend and first resistance test (April-May)
BUY_SIGNAL: x=8, y=35, label="Early Rally Buy", description="Breakout above 212 resistance with volume", date="Apr 29 - May 6"
BUY_SIGNAL: x=18, y=25, label="Major Breakout", description="Explosive move 214→219, strong bullish engulfing", date="2-3 bars after May 13"
SELL_SIGNAL: x=25, y=30, label="Take Profit Zone", description="Resistance rejection at 219-220 level", date="Around May 20"
RESISTANCE_LEVEL: x=20, y=18, label="First Resistance", description="219-220 level, multiple rejections", date="May 15-20 period"

GROUP: CONSOLIDATION_PHASE
PHASE_DESCRIPTION: Pullback and support formation (Late May-Early June)
SUPPORT_LEVEL: x=30, y=40, label="Pullback Support", description="215-216 area holds, previous resistance becomes support", date="May 28 area"
BUY_SIGNAL: x=35, y=25, label="Second Rally Attempt", description="Breaking above 218 with volume confirmation", date="2-3 bars after Jun 4"

GROUP: FAILURE_PHASE
PHASE_DESCRIPTION: Major reversal and breakdown (Mid June)
SELL_SIGNAL: x=45, y=20, label="Failed Breakout", description="Major reversal from 220, shooting star pattern", date="Around Jun 11"
RESISTANCE_LEVEL: x=45, y=15, label="Major Resistance", description="220 level proves too strong, heavy selling", date="Jun 11 peak"
SELL_SIGNAL: x=50, y=35, label="Breakdown Confirmation", description="Close below 215 support, trend break", date="Mid-June decline"

GROUP: RECOVERY_PHASE
PHASE_DESCRIPTION: Support hold and new rally (Late June-July)
SUPPORT_LEVEL: x=55, y=70, label="Key Support", description="210 level holds strong, multiple hammer patterns", date="Jun 26 - Jul 5"
BUY_SIGNAL: x=58, y=65, label="Recovery Buy", description="Bullish engulfing pattern off 210 support", date="2-3 bars after Jun 26"
BUY_SIGNAL: x=65, y=45, label="Momentum Buy", description="Break above 215, reclaiming previous support", date="Early July"

GROUP: CURRENT_PHASE
PHASE_DESCRIPTION: Testing new resistance levels (Recent)
BUY_SIGNAL: x=75, y=30, label="Breakout Buy", description="Push above 220 resistance, volume expansion", date="Jul 11 onwards"
RESISTANCE_LEVEL: x=85, y=12, label="Current Resistance", description="224-225 area, testing new highs", date="Jul 18 current"
SUPPORT_LEVEL: x=75, y=25, label="New Support", description="220 level now support, role reversal", date="Current level"

GROUP: VOLUME_CONFIRMATION
PHASE_DESCRIPTION: Volume analysis and confirmation signals
BUY_SIGNAL: x=18, y=80, label="Volume Breakout", description="High volume bar confirms major breakout", date="May 15 area volume"
SELL_SIGNAL: x=45, y=85, label="Volume Selling", description="Heavy volume on breakdown, distribution", date="Jun 11 volume spike"
BUY_SIGNAL: x=58, y=90, label="Volume Recovery", description="Increasing volume on bounce from support", date="Late June volume""#;

/// Number of `GROUP:` lines in [`EXAMPLE_ANALYSIS`].
pub const EXAMPLE_GROUP_COUNT: usize = 6;

/// Number of signal lines in [`EXAMPLE_ANALYSIS`] that carry both coordinates.
pub const EXAMPLE_SIGNAL_COUNT: usize = 18;
