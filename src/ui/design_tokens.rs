// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Design tokens used by the toast style collaborator.

## Organization

- **Palette**: Base and category accent colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_toasts::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Fade an accent for a closing toast
let faded = Color {
    a: opacity::CLOSING,
    ..palette::SUCCESS_500
};

// Use the spacing scale
let padding = spacing::MD; // 16px
```
"#]

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use iced::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    // Category accents
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    /// Toasts marked for removal.
    pub const CLOSING: f32 = 0.4;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Component Sizing
// ============================================================================

pub mod sizing {
    pub const ICON_MD: f32 = 24.0;

    pub const TOAST_WIDTH: f32 = 320.0;
    /// Room reserved for the close control of persistent toasts.
    pub const CLOSE_BUTTON_WIDTH: f32 = 64.0;
}

// ============================================================================
// Typography
// ============================================================================

pub mod typography {
    pub const TITLE_MD: f32 = 20.0;
    pub const BODY: f32 = 14.0;
    pub const BODY_SM: f32 = 13.0;
}

// ============================================================================
// Borders and Radii
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::CLOSING > 0.0 && opacity::CLOSING < 1.0);

    assert!(sizing::TOAST_WIDTH > sizing::CLOSE_BUTTON_WIDTH + sizing::ICON_MD);

    assert!(typography::TITLE_MD > typography::BODY);
    assert!(typography::BODY > typography::BODY_SM);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
