/// Best-effort guess at whether the desktop prefers a dark color scheme.
/// Used when the theme setting is `SystemDefault`. Falls back to light.
pub fn detect_system_dark_mode() -> bool {
    #[cfg(target_os = "windows")]
    {
        use winreg::RegKey;
        use winreg::enums::HKEY_CURRENT_USER;

        let personalize = RegKey::predef(HKEY_CURRENT_USER)
            .open_subkey("Software\\Microsoft\\Windows\\CurrentVersion\\Themes\\Personalize");
        // AppsUseLightTheme is 0 in dark mode
        if let Ok(key) = personalize {
            if let Ok(light) = key.get_value::<u32, _>("AppsUseLightTheme") {
                return light == 0;
            }
        }
    }

    #[cfg(target_os = "linux")]
    {
        let gtk_theme = command_stdout("gsettings", &["get", "org.gnome.desktop.interface", "gtk-theme"]);
        let color_scheme = command_stdout("gsettings", &["get", "org.gnome.desktop.interface", "color-scheme"]);
        if [gtk_theme, color_scheme].iter().flatten().any(|v| setting_says_dark(v)) {
            return true;
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(style) = command_stdout("defaults", &["read", "-g", "AppleInterfaceStyle"]) {
            return setting_says_dark(&style);
        }
    }

    false
}

/// `true` for values like `'Adwaita-dark'` or `'prefer-dark'`.
pub fn setting_says_dark(value: &str) -> bool {
    value.to_lowercase().contains("dark")
}

#[cfg(any(target_os = "linux", target_os = "macos"))]
fn command_stdout(program: &str, args: &[&str]) -> Option<String> {
    let output = std::process::Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        tracing::debug!(program, "theme probe exited with {}", output.status);
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_values() {
        assert!(setting_says_dark("'Adwaita-dark'"));
        assert!(setting_says_dark("'prefer-dark'"));
        assert!(setting_says_dark("Dark"));
    }

    #[test]
    fn test_light_values() {
        assert!(!setting_says_dark("'Adwaita'"));
        assert!(!setting_says_dark("'default'"));
        assert!(!setting_says_dark(""));
    }
}
