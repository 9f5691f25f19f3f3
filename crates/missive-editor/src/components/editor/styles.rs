//! Stylesheet injected alongside every editor instance.

pub(crate) const EDITOR_STYLES: &str = r#"
.missive-container {
  display: flex;
  flex-direction: column;
  border: 1px solid #e5e7eb;
  border-radius: 8px;
  overflow: hidden;
  background-color: #ffffff;
  box-shadow: 0 1px 2px 0 rgba(0, 0, 0, 0.05);
  font-family: ui-sans-serif, system-ui, -apple-system, "Segoe UI", Roboto, Arial, sans-serif;
}

.missive-toolbar {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  gap: 4px;
  padding: 8px;
  border-bottom: 1px solid #e5e7eb;
  background-color: #f9fafb;
  user-select: none;
}

.missive-group {
  display: flex;
  align-items: center;
  gap: 2px;
  padding-right: 8px;
  border-right: 1px solid #e5e7eb;
  margin-right: 4px;
}

.missive-group:last-child {
  border-right: none;
}

.missive-btn {
  display: flex;
  align-items: center;
  justify-content: center;
  min-width: 30px;
  padding: 6px;
  border-radius: 4px;
  color: #4b5563;
  background: transparent;
  border: none;
  cursor: pointer;
  font-size: 14px;
  transition: background-color 0.2s;
}

.missive-btn:hover {
  background-color: #f3f4f6;
  color: #111827;
}

.missive-btn.active {
  background-color: #eff6ff;
  color: #2563eb;
}

.missive-select-wrapper {
  position: relative;
  display: flex;
  align-items: center;
}

.missive-select {
  appearance: none;
  -webkit-appearance: none;
  background-color: transparent;
  color: #374151;
  font-size: 14px;
  font-weight: 500;
  padding: 4px 24px 4px 8px;
  border-radius: 4px;
  border: 1px solid transparent;
  outline: none;
  cursor: pointer;
}

.missive-select:hover {
  background-color: #f3f4f6;
  border-color: #e5e7eb;
}

.missive-chevron {
  position: absolute;
  right: 6px;
  top: 50%;
  transform: translateY(-50%);
  pointer-events: none;
  color: #9ca3af;
  font-size: 10px;
}

.missive-dropdown {
  position: relative;
}

.missive-popup {
  position: absolute;
  top: 100%;
  left: 0;
  margin-top: 4px;
  background-color: white;
  border: 1px solid #e5e7eb;
  box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06);
  border-radius: 6px;
  padding: 12px;
  z-index: 50;
  min-width: 200px;
  animation: missive-fade-in 0.1s ease-out;
}

@keyframes missive-fade-in {
  from { opacity: 0; transform: scale(0.95); }
  to { opacity: 1; transform: scale(1); }
}

.missive-label {
  font-size: 11px;
  font-weight: 600;
  color: #6b7280;
  margin-bottom: 8px;
  text-transform: uppercase;
  letter-spacing: 0.05em;
}

.missive-grid {
  display: grid;
  grid-template-columns: repeat(5, 1fr);
  gap: 6px;
  margin-bottom: 12px;
}

.missive-color-swatch {
  width: 24px;
  height: 24px;
  border-radius: 4px;
  border: 1px solid #e5e7eb;
  cursor: pointer;
  transition: transform 0.1s;
}

.missive-color-swatch:hover {
  transform: scale(1.1);
  border-color: #9ca3af;
}

.missive-color-custom {
  border-top: 1px solid #e5e7eb;
  padding-top: 8px;
  margin-top: 8px;
}

.missive-color-input {
  width: 100%;
  height: 32px;
  padding: 0;
  border: 0;
  border-radius: 4px;
  cursor: pointer;
}

.missive-variables-header {
  padding: 8px 12px;
  border-bottom: 1px solid #e5e7eb;
  margin: 0;
}

.missive-variables-list {
  max-height: 240px;
  overflow-y: auto;
  padding: 4px;
}

.missive-variables-empty {
  padding: 8px 12px;
  font-size: 14px;
  color: #9ca3af;
  font-style: italic;
}

.missive-list-btn {
  width: 100%;
  text-align: left;
  padding: 8px 12px;
  font-size: 14px;
  color: #374151;
  background: none;
  border: none;
  cursor: pointer;
  border-radius: 4px;
}

.missive-list-btn:hover {
  background-color: #eff6ff;
  color: #2563eb;
}

.missive-pad-row {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: 8px;
}

.missive-pad-label {
  color: #6b7280;
  font-size: 12px;
  text-transform: capitalize;
  width: 40px;
}

.missive-pad-ctrl {
  display: flex;
  align-items: center;
  border: 1px solid #e5e7eb;
  border-radius: 4px;
  background-color: #f9fafb;
  overflow: hidden;
}

.missive-pad-btn {
  padding: 4px 6px;
  background: transparent;
  border: none;
  color: #4b5563;
  cursor: pointer;
}

.missive-pad-btn:hover {
  background-color: #e5e7eb;
}

.missive-pad-val {
  font-size: 12px;
  font-weight: 500;
  width: 32px;
  text-align: center;
  color: #374151;
  user-select: none;
}

.missive-editor-area {
  flex: 1;
  position: relative;
  background-color: white;
}

.missive-content {
  width: 100%;
  height: 100%;
  min-height: 300px;
  outline: none;
  overflow-y: auto;
  font-family: Helvetica, Arial, sans-serif;
}

.missive-placeholder {
  position: absolute;
  color: #9ca3af;
  pointer-events: none;
}

.missive-content ul { list-style-type: disc; padding-left: 1.5em; margin: 1em 0; }
.missive-content ol { list-style-type: decimal; padding-left: 1.5em; margin: 1em 0; }
.missive-content h1 { font-size: 2em; font-weight: bold; margin: 0.67em 0; border-bottom: 1px solid #eee; padding-bottom: 0.3em; }
.missive-content h2 { font-size: 1.5em; font-weight: bold; margin: 0.83em 0; }
.missive-content p { margin: 1em 0; }
.missive-content blockquote { border-left: 4px solid #e5e7eb; margin: 1em 0; padding-left: 1em; color: #4b5563; font-style: italic; }
.missive-content a { color: #2563eb; text-decoration: underline; }
.missive-content img { max-width: 100%; height: auto; border-radius: 4px; }
"#;
