/// Embedded web assets for the diagram page

/// Styles shared by the standalone SVG and the page.
pub const DIAGRAM_CSS: &str = r#"
.node {
    font: 300 11px "Helvetica Neue", Helvetica, Arial, sans-serif;
    fill: #bbb;
    cursor: default;
}

.node:hover {
    fill: #000;
}

.link {
    stroke: steelblue;
    stroke-opacity: 0.4;
    fill: none;
    pointer-events: none;
}

.node:hover,
.node.nodeSource,
.node.nodeTarget {
    font-weight: 700;
}

.node.nodeTarget {
    fill: #2ca02c;
}

.node.nodeSource {
    fill: #d62728;
}

.link.linkSource,
.link.linkTarget {
    stroke-opacity: 1;
    stroke-width: 2px;
}

.link.linkTarget {
    stroke: #2ca02c;
}

.link.linkSource {
    stroke: #d62728;
}
"#;

pub const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{title}}</title>
    <style>
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, sans-serif;
            background: #fff;
            color: #333;
        }

        #container {
            display: flex;
            min-height: 100vh;
        }

        #diagram {
            flex: 1;
            display: flex;
            justify-content: center;
            align-items: center;
        }

        #sidebar {
            width: 260px;
            border-left: 1px solid #ddd;
            padding: 20px;
        }

        h1 {
            font-size: 1.3em;
            margin-bottom: 10px;
            word-break: break-all;
        }

        .stat {
            display: flex;
            justify-content: space-between;
            padding: 8px 0;
            border-bottom: 1px solid #eee;
        }

        .stat-value {
            font-weight: bold;
        }

        #hovered {
            margin-top: 20px;
            font-size: 0.9em;
            word-break: break-all;
            color: #666;
        }
    </style>
</head>
<body>
    <div id="container">
        <div id="diagram">{{svg}}</div>
        <div id="sidebar">
            <h1>{{title}}</h1>
            <div class="stat">
                <span>Leaves</span>
                <span class="stat-value">{{leaves}}</span>
            </div>
            <div class="stat">
                <span>Imports</span>
                <span class="stat-value">{{links}}</span>
            </div>
            <div class="stat">
                <span>Unresolved</span>
                <span class="stat-value">{{unresolved}}</span>
            </div>
            <div id="hovered"></div>
        </div>
    </div>

    <script>
        const links = Array.from(document.querySelectorAll('path.link'));
        const nodes = Array.from(document.querySelectorAll('text.node'));
        const hovered = document.getElementById('hovered');

        function mouseovered(name) {
            const targets = new Set();
            const sources = new Set();

            links.forEach(link => {
                const isTarget = link.dataset.target === name;
                const isSource = link.dataset.source === name;
                link.classList.toggle('linkTarget', isTarget);
                link.classList.toggle('linkSource', isSource);
                if (isTarget) sources.add(link.dataset.source);
                if (isSource) targets.add(link.dataset.target);
            });

            // Redraw touching links last so they sit on top.
            links
                .filter(link => link.dataset.target === name || link.dataset.source === name)
                .forEach(link => link.parentNode.appendChild(link));

            nodes.forEach(node => {
                node.classList.toggle('nodeTarget', targets.has(node.dataset.name));
                node.classList.toggle('nodeSource', sources.has(node.dataset.name));
            });

            hovered.textContent = name + ': imports ' + targets.size + ', imported by ' + sources.size;
        }

        function mouseouted() {
            links.forEach(link => link.classList.remove('linkTarget', 'linkSource'));
            nodes.forEach(node => node.classList.remove('nodeTarget', 'nodeSource'));
            hovered.textContent = '';
        }

        nodes.forEach(node => {
            node.addEventListener('mouseover', () => mouseovered(node.dataset.name));
            node.addEventListener('mouseout', mouseouted);
        });
    </script>
</body>
</html>
"#;
