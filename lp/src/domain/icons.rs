//! Selectable icon glyphs for manual icon assignment

/// Glyphs offered when a user picks an icon for a tool by hand
pub const ICON_PALETTE: &[&str] = &[
    "🚀", "⚡", "🎨", "💻", "📊", "💬", "📝", "📁", "🔧", "🛠️", "🌐", "🔍", "📈", "🎯", "💡", "📱", "🧪", "📦",
    "🔒", "📅", "📧", "🎬", "🎵", "🤖",
];
